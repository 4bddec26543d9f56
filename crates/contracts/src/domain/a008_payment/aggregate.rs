use crate::domain::common::{
    clearable_id, clearable_text, display_ref, Clearable, Estado, NamedRef, PersonRef, Resource,
};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::money::format_money;
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Платёж пациента; бэкенд вкладывает пациента и форму оплаты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pago {
    pub id: i64,
    #[serde(default)]
    pub paciente: Option<PersonRef>,
    #[serde(default)]
    pub forma_pago: Option<NamedRef>,
    #[serde(default)]
    pub proforma_id: Option<i64>,
    #[serde(default)]
    pub monto: f64,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub concepto: Option<String>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub estado: Estado,
}

impl Pago {
    pub fn forma_pago_nombre(&self) -> String {
        self.forma_pago
            .as_ref()
            .map(|f| f.nombre.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Resource for Pago {
    const PATH: &'static str = "/pagos";
    const KEY: &'static str = "a008_payment";
    const TITLE: &'static str = "Pagos";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for Pago {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::center("Fecha"),
            ReportColumn::new("Paciente").weighted(2.0),
            ReportColumn::new("Concepto").weighted(2.0),
            ReportColumn::new("Forma de pago"),
            ReportColumn::right("Monto (Bs.)"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.fecha.as_deref().map(format_date).unwrap_or_default(),
            display_ref(&self.paciente),
            self.concepto.clone().unwrap_or_default(),
            self.forma_pago_nombre(),
            format_money(self.monto),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagoDto {
    pub paciente_id: i64,
    pub forma_pago_id: i64,
    pub monto: f64,
    pub fecha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proforma_id: Clearable<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concepto: Clearable<String>,
    /// Автор записи из текущей сессии
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PagoForm {
    pub id: Option<i64>,
    pub paciente_id: Option<i64>,
    pub forma_pago_id: Option<i64>,
    pub proforma_id: Option<i64>,
    pub monto: f64,
    pub fecha: String,
    pub concepto: String,
}

impl PagoForm {
    pub fn from_entity(p: &Pago) -> Self {
        Self {
            id: Some(p.id),
            paciente_id: p.paciente.as_ref().map(|r| r.id),
            forma_pago_id: p.forma_pago.as_ref().map(|r| r.id),
            proforma_id: p.proforma_id,
            monto: p.monto,
            fecha: p.fecha.as_deref().map(input_date).unwrap_or_default(),
            concepto: p.concepto.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.paciente_id.is_none() {
            return Err("Seleccione un paciente");
        }
        if self.forma_pago_id.is_none() {
            return Err("Seleccione la forma de pago");
        }
        if self.monto <= 0.0 {
            return Err("El monto debe ser mayor a cero");
        }
        if self.fecha.trim().is_empty() {
            return Err("La fecha es obligatoria");
        }
        Ok(())
    }

    pub fn to_dto(&self, usuario_id: Option<i64>) -> Option<PagoDto> {
        let editing = self.id.is_some();
        Some(PagoDto {
            paciente_id: self.paciente_id?,
            forma_pago_id: self.forma_pago_id?,
            monto: self.monto,
            fecha: self.fecha.trim().to_string(),
            proforma_id: clearable_id(self.proforma_id, editing),
            concepto: clearable_text(&self.concepto, editing),
            usuario_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_payment_row() {
        let p: Pago = serde_json::from_value(serde_json::json!({
            "id": 1,
            "paciente": { "id": 3, "nombre": "Luis", "apellido": "Vaca" },
            "formaPago": { "id": 2, "nombre": "QR" },
            "monto": 1500.5,
            "fecha": "2024-03-15T00:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(
            p.report_cells(),
            vec!["15/03/2024", "Luis Vaca", "", "QR", "1.500,50"]
        );
    }

    #[test]
    fn test_dto_stamps_author() {
        let form = PagoForm {
            paciente_id: Some(3),
            forma_pago_id: Some(2),
            monto: 200.0,
            fecha: "2024-03-15".into(),
            ..Default::default()
        };
        assert!(form.validate().is_ok());
        let body = serde_json::to_value(form.to_dto(Some(7)).unwrap()).unwrap();
        assert_eq!(body["usuarioId"], 7);
        assert!(body.get("concepto").is_none());
        assert!(body.get("proformaId").is_none());
    }
}
