use crate::domain::common::{
    any_discount, clearable_id, clearable_text, display_ref, lines_total, linked_records_reason,
    non_empty, Clearable, DeleteGuard, PersonRef, Resource, TreatmentLine,
};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::money::format_money;
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Проформа (presupuesto): смета лечения для пациента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proforma {
    pub id: i64,
    #[serde(default)]
    pub paciente: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub items: Vec<TreatmentLine>,
    /// Итог, сохранённый бэкендом
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub nota: Option<String>,
    #[serde(default)]
    pub aprobado: bool,
    #[serde(default)]
    pub codigo_aprobacion: Option<String>,
    #[serde(default)]
    pub fecha_aprobacion: Option<String>,
    #[serde(default)]
    pub tiene_pagos: bool,
    #[serde(default)]
    pub tiene_historia_clinica: bool,
}

impl Proforma {
    /// Номер документа для заголовка PDF
    pub fn numero(&self) -> String {
        format!("P-{:05}", self.id)
    }

    /// Сумма строк; если строк нет, итог бэкенда
    pub fn computed_total(&self) -> f64 {
        if self.items.is_empty() {
            self.total.unwrap_or(0.0)
        } else {
            lines_total(&self.items)
        }
    }

    pub fn has_discounts(&self) -> bool {
        any_discount(&self.items)
    }

    pub fn approval_label(&self) -> &'static str {
        if self.aprobado {
            "Aprobado"
        } else {
            "Pendiente"
        }
    }
}

impl DeleteGuard for Proforma {
    fn delete_blocked_reason(&self) -> Option<&'static str> {
        linked_records_reason(self.tiene_pagos, self.tiene_historia_clinica)
    }
}

impl Resource for Proforma {
    const PATH: &'static str = "/proformas";
    const KEY: &'static str = "a009_proforma";
    const TITLE: &'static str = "Presupuestos";
    const SOFT_DELETE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}

impl ReportRow for Proforma {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::center("N°"),
            ReportColumn::center("Fecha"),
            ReportColumn::new("Paciente").weighted(2.0),
            ReportColumn::new("Doctor").weighted(2.0),
            ReportColumn::right("Total (Bs.)"),
            ReportColumn::center("Aprobación"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.numero(),
            self.fecha.as_deref().map(format_date).unwrap_or_default(),
            display_ref(&self.paciente),
            display_ref(&self.doctor),
            format_money(self.computed_total()),
            self.approval_label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProformaDto {
    pub paciente_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Clearable<i64>,
    pub fecha: String,
    pub items: Vec<TreatmentLine>,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nota: Clearable<String>,
}

/// Тело запроса на утверждение проформы кодом пациента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AprobacionDto {
    pub codigo_aprobacion: String,
}

impl AprobacionDto {
    pub fn new(codigo: &str) -> Option<Self> {
        non_empty(codigo).map(|codigo_aprobacion| Self { codigo_aprobacion })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProformaForm {
    pub id: Option<i64>,
    pub paciente_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub fecha: String,
    pub nota: String,
    pub items: Vec<TreatmentLine>,
}

impl ProformaForm {
    pub fn from_entity(p: &Proforma) -> Self {
        Self {
            id: Some(p.id),
            paciente_id: p.paciente.as_ref().map(|r| r.id),
            doctor_id: p.doctor.as_ref().map(|r| r.id),
            fecha: p.fecha.as_deref().map(input_date).unwrap_or_default(),
            nota: p.nota.clone().unwrap_or_default(),
            items: p.items.clone(),
        }
    }

    pub fn total(&self) -> f64 {
        lines_total(&self.items)
    }

    pub fn add_item(&mut self) {
        self.items.push(TreatmentLine {
            cantidad: 1.0,
            ..Default::default()
        });
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.paciente_id.is_none() {
            return Err("Seleccione un paciente");
        }
        if self.fecha.trim().is_empty() {
            return Err("La fecha es obligatoria");
        }
        if self.items.iter().all(TreatmentLine::is_blank) {
            return Err("Agregue al menos un tratamiento");
        }
        if self.items.iter().any(|i| i.cantidad <= 0.0 || i.precio_unitario < 0.0) {
            return Err("Revise cantidades y precios de los tratamientos");
        }
        Ok(())
    }

    /// Пустые строки отбрасываются, итог пересчитывается по оставшимся
    pub fn to_dto(&self) -> Option<ProformaDto> {
        let editing = self.id.is_some();
        let items: Vec<TreatmentLine> = self
            .items
            .iter()
            .filter(|i| !i.is_blank())
            .cloned()
            .collect();
        Some(ProformaDto {
            paciente_id: self.paciente_id?,
            doctor_id: clearable_id(self.doctor_id, editing),
            fecha: self.fecha.trim().to_string(),
            total: lines_total(&items),
            items,
            nota: clearable_text(&self.nota, editing),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Proforma {
        serde_json::from_value(serde_json::json!({
            "id": 12,
            "paciente": { "id": 1, "nombre": "Ana", "apellido": "Rojas" },
            "fecha": "2024-05-02",
            "items": [
                { "tratamiento": "Limpieza", "cantidad": 1, "precioUnitario": 150 },
                { "tratamiento": "Corona", "pieza": "16", "cantidad": 1, "precioUnitario": 1200, "descuento": 10 }
            ],
            "tienePagos": true
        }))
        .unwrap()
    }

    #[test]
    fn test_delete_blocked_by_server_flags() {
        let mut p = sample();
        assert!(!p.can_delete());
        p.tiene_pagos = false;
        assert!(p.can_delete());
        p.tiene_historia_clinica = true;
        assert!(!p.can_delete());
    }

    #[test]
    fn test_computed_total_and_discounts() {
        let p = sample();
        assert_eq!(p.computed_total(), 1230.0);
        assert!(p.has_discounts());
        assert_eq!(p.report_cells()[4], "1.230,00");
        assert_eq!(p.numero(), "P-00012");
    }

    #[test]
    fn test_dto_drops_blank_lines() {
        let mut form = ProformaForm::from_entity(&sample());
        form.add_item();
        assert_eq!(form.items.len(), 3);
        assert!(form.validate().is_ok());
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.total, 1230.0);
    }

    #[test]
    fn test_aprobacion_requires_code() {
        assert!(AprobacionDto::new("  ").is_none());
        let body = serde_json::to_value(AprobacionDto::new("AB12").unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "codigoAprobacion": "AB12" }));
    }
}
