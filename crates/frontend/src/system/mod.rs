pub mod auth;
pub mod backups;
pub mod chatbot;
pub mod pages;
pub mod users;
