//! Общие контракты консоли Curare: DTO сущностей бэкенда, конверт списков
//! и чистая логика представления (пагинация, телефоны, суммы прописью).
//!
//! Крейт не зависит от браузера, поэтому всё, что здесь лежит,
//! тестируется обычным `cargo test`.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
