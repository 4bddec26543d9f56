use crate::domain::common::{Estado, Resource};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Автоответ WhatsApp-бота по ключевому слову
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespuestaChatbot {
    pub id: i64,
    pub palabra_clave: String,
    pub respuesta: String,
    #[serde(default)]
    pub estado: Estado,
}

impl Resource for RespuestaChatbot {
    const PATH: &'static str = "/chatbot";
    const KEY: &'static str = "sys_chatbot";
    const TITLE: &'static str = "Chatbot";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for RespuestaChatbot {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Palabra clave"),
            ReportColumn::new("Respuesta").weighted(4.0),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.palabra_clave.clone(),
            self.respuesta.clone(),
            self.estado.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespuestaChatbotDto {
    pub palabra_clave: String,
    pub respuesta: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RespuestaChatbotForm {
    pub id: Option<i64>,
    pub palabra_clave: String,
    pub respuesta: String,
}

impl RespuestaChatbotForm {
    pub fn from_entity(r: &RespuestaChatbot) -> Self {
        Self {
            id: Some(r.id),
            palabra_clave: r.palabra_clave.clone(),
            respuesta: r.respuesta.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.palabra_clave.trim().is_empty() || self.respuesta.trim().is_empty() {
            return Err("Complete la palabra clave y la respuesta");
        }
        Ok(())
    }

    /// Ключевое слово хранится в нижнем регистре
    pub fn to_dto(&self) -> RespuestaChatbotDto {
        RespuestaChatbotDto {
            palabra_clave: self.palabra_clave.trim().to_lowercase(),
            respuesta: self.respuesta.trim().to_string(),
        }
    }
}
