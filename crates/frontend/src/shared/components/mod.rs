pub mod date_range_picker;
pub mod details_shell;
pub mod entity_select;
pub mod estado_badge;
pub mod form_fields;
pub mod list_toolbar;
pub mod pagination_controls;
pub mod phone_input;
pub mod stat_card;
pub mod treatment_lines;
