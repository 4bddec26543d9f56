use serde::{Deserialize, Serialize};

/// Состояние записи для мягкого удаления.
///
/// Бэкенд хранит поле `estado` строкой в нижнем регистре.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Estado {
    #[default]
    Activo,
    Inactivo,
}

impl Estado {
    pub fn is_active(&self) -> bool {
        matches!(self, Estado::Activo)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Estado::Activo => "Activo",
            Estado::Inactivo => "Inactivo",
        }
    }
}

/// Тело PATCH-запроса, меняющего только состояние записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstadoPatch {
    pub estado: Estado,
}

impl EstadoPatch {
    pub fn soft_delete() -> Self {
        Self {
            estado: Estado::Inactivo,
        }
    }

    pub fn reactivate() -> Self {
        Self {
            estado: Estado::Activo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_delete_payload() {
        let body = serde_json::to_value(EstadoPatch::soft_delete()).unwrap();
        assert_eq!(body, serde_json::json!({ "estado": "inactivo" }));
    }

    #[test]
    fn test_reactivate_payload() {
        let body = serde_json::to_value(EstadoPatch::reactivate()).unwrap();
        assert_eq!(body, serde_json::json!({ "estado": "activo" }));
    }

    #[test]
    fn test_estado_parse() {
        let e: Estado = serde_json::from_str("\"inactivo\"").unwrap();
        assert_eq!(e, Estado::Inactivo);
        assert!(!e.is_active());
    }
}
