//! Вкладки центральной области
//!
//! - `page` - обёртка содержимого вкладки
//! - `registry` - ключ вкладки → экран
//! - `tab_labels` - заголовки вкладок

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
