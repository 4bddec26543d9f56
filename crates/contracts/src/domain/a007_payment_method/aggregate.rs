use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Способ оплаты (efectivo, QR, transferencia...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormaPago {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl Resource for FormaPago {
    const PATH: &'static str = "/formas-pago";
    const KEY: &'static str = "a007_payment_method";
    const TITLE: &'static str = "Formas de pago";
    const PAGE_SIZE: usize = 5;

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for FormaPago {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Forma de pago"),
            ReportColumn::new("Descripción").weighted(2.0),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.descripcion.clone().unwrap_or_default(),
            self.estado.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormaPagoDto {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Clearable<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormaPagoForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
}

impl FormaPagoForm {
    pub fn from_entity(f: &FormaPago) -> Self {
        Self {
            id: Some(f.id),
            nombre: f.nombre.clone(),
            descripcion: f.descripcion.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> FormaPagoDto {
        let editing = self.id.is_some();
        FormaPagoDto {
            nombre: self.nombre.trim().to_string(),
            descripcion: clearable_text(&self.descripcion, editing),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre es obligatorio");
        }
        Ok(())
    }
}
