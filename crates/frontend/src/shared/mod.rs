pub mod api_utils;
pub mod clinic;
pub mod components;
pub mod date_utils;
pub mod dialogs;
pub mod document_actions;
pub mod export;
pub mod form_vm;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notify;
pub mod page_frame;
pub mod page_standard;
pub mod request_seq;
pub mod resource_list;
