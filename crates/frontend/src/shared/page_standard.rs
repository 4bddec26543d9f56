//! Категории страниц внутри вкладки.
//!
//! Корень каждой страницы получает `id` вида `{entity}--{category}`
//! (например `"a001_patient--list"`) и `data-page-category`.
//! По `id` из инспектора браузера сразу находится каталог `domain/a001_patient/`.

/// Таблица с поиском и пагинацией
pub const PAGE_CAT_LIST: &str = "list";

/// Форма одной записи
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Дашборд со сводными цифрами
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Администрирование (пользователи, копии, чат-бот)
pub const PAGE_CAT_SYSTEM: &str = "system";

pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_patient--list"));
        assert!(is_valid_page_id("d400_statistics--dashboard"));
        assert!(!is_valid_page_id("a001_patient"));
        assert!(!is_valid_page_id("--list"));
    }
}
