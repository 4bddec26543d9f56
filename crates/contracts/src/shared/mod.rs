pub mod amount_in_words;
pub mod date_format;
pub mod money;
pub mod pagination;
pub mod phone;
pub mod report;
