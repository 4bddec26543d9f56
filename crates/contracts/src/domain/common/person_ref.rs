use serde::{Deserialize, Serialize};

/// Вложенная ссылка на пациента/доктора, которую бэкенд отдаёт внутри
/// платежей, проформ и т.п.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonRef {
    pub id: i64,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub apellido: String,
}

impl PersonRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido).trim().to_string()
    }
}

/// Имя из необязательной ссылки, `-` если связи нет
pub fn display_ref(r: &Option<PersonRef>) -> String {
    r.as_ref()
        .map(PersonRef::full_name)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string())
}

/// Ссылка на справочник, у которого есть только имя (лаборатория, форма оплаты)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NamedRef {
    pub id: i64,
    #[serde(default)]
    pub nombre: String,
}

/// Пустая строка формы → `None` в DTO
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
