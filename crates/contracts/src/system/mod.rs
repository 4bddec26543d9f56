//! Системные сущности: сессия, пользователи, резервные копии, чат-бот

pub mod auth;
pub mod backups;
pub mod chatbot;
pub mod users;
