//! Необязательные поля в теле POST/PATCH.
//!
//! `None` — ключа нет (создание с пустым полем), `Some(None)` — `null`
//! (поле очищено при редактировании), `Some(Some(v))` — новое значение.
//! Поле объявляется с `skip_serializing_if = "Option::is_none"`.

use super::non_empty;

pub type Clearable<T> = Option<Option<T>>;

/// Текстовое поле формы; при редактировании пустая строка стирает значение
pub fn clearable_text(value: &str, editing: bool) -> Clearable<String> {
    clearable(non_empty(value), editing)
}

/// Выбор из справочника; при редактировании «ninguno» стирает ссылку
pub fn clearable_id(value: Option<i64>, editing: bool) -> Clearable<i64> {
    clearable(value, editing)
}

fn clearable<T>(value: Option<T>, editing: bool) -> Clearable<T> {
    match value {
        Some(v) => Some(Some(v)),
        None if editing => Some(None),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Body {
        #[serde(skip_serializing_if = "Option::is_none")]
        nota: Clearable<String>,
    }

    #[test]
    fn test_clearable_text() {
        assert_eq!(clearable_text("  ", false), None);
        assert_eq!(clearable_text("  ", true), Some(None));
        assert_eq!(clearable_text(" hola ", true), Some(Some("hola".to_string())));
        assert_eq!(clearable_id(None, true), Some(None));
        assert_eq!(clearable_id(Some(3), false), Some(Some(3)));
    }

    #[test]
    fn test_cleared_field_is_sent_as_null() {
        let created = serde_json::to_value(Body { nota: clearable_text("", false) }).unwrap();
        assert_eq!(created, serde_json::json!({}));
        let edited = serde_json::to_value(Body { nota: clearable_text("", true) }).unwrap();
        assert_eq!(edited, serde_json::json!({ "nota": null }));
    }
}
