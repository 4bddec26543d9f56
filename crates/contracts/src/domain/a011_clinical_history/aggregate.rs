use crate::domain::common::{
    clearable_id, clearable_text, display_ref, Clearable, Estado, PersonRef, Resource,
};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Запись истории болезни: приём пациента по проформе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoriaClinica {
    pub id: i64,
    #[serde(default)]
    pub paciente: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    #[serde(default)]
    pub proforma_id: Option<i64>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub motivo_consulta: String,
    #[serde(default)]
    pub diagnostico: Option<String>,
    #[serde(default)]
    pub tratamiento: Option<String>,
    #[serde(default)]
    pub pieza: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl Resource for HistoriaClinica {
    const PATH: &'static str = "/historias-clinicas";
    const KEY: &'static str = "a011_clinical_history";
    const TITLE: &'static str = "Historia clínica";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for HistoriaClinica {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::center("Fecha"),
            ReportColumn::new("Paciente").weighted(1.5),
            ReportColumn::new("Doctor").weighted(1.5),
            ReportColumn::new("Motivo").weighted(2.0),
            ReportColumn::new("Diagnóstico").weighted(2.0),
            ReportColumn::center("Pieza"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.fecha.as_deref().map(format_date).unwrap_or_default(),
            display_ref(&self.paciente),
            display_ref(&self.doctor),
            self.motivo_consulta.clone(),
            self.diagnostico.clone().unwrap_or_default(),
            self.pieza.clone().unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoriaClinicaDto {
    pub paciente_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Clearable<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proforma_id: Clearable<i64>,
    pub fecha: String,
    pub motivo_consulta: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostico: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamiento: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieza: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Clearable<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoriaClinicaForm {
    pub id: Option<i64>,
    pub paciente_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub proforma_id: Option<i64>,
    pub fecha: String,
    pub motivo_consulta: String,
    pub diagnostico: String,
    pub tratamiento: String,
    pub pieza: String,
    pub observaciones: String,
}

impl HistoriaClinicaForm {
    pub fn from_entity(h: &HistoriaClinica) -> Self {
        Self {
            id: Some(h.id),
            paciente_id: h.paciente.as_ref().map(|r| r.id),
            doctor_id: h.doctor.as_ref().map(|r| r.id),
            proforma_id: h.proforma_id,
            fecha: h.fecha.as_deref().map(input_date).unwrap_or_default(),
            motivo_consulta: h.motivo_consulta.clone(),
            diagnostico: h.diagnostico.clone().unwrap_or_default(),
            tratamiento: h.tratamiento.clone().unwrap_or_default(),
            pieza: h.pieza.clone().unwrap_or_default(),
            observaciones: h.observaciones.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.paciente_id.is_none() {
            return Err("Seleccione un paciente");
        }
        if self.fecha.trim().is_empty() {
            return Err("La fecha es obligatoria");
        }
        if self.motivo_consulta.trim().is_empty() {
            return Err("El motivo de consulta es obligatorio");
        }
        Ok(())
    }

    pub fn to_dto(&self) -> Option<HistoriaClinicaDto> {
        let editing = self.id.is_some();
        Some(HistoriaClinicaDto {
            paciente_id: self.paciente_id?,
            doctor_id: clearable_id(self.doctor_id, editing),
            proforma_id: clearable_id(self.proforma_id, editing),
            fecha: self.fecha.trim().to_string(),
            motivo_consulta: self.motivo_consulta.trim().to_string(),
            diagnostico: clearable_text(&self.diagnostico, editing),
            tratamiento: clearable_text(&self.tratamiento, editing),
            pieza: clearable_text(&self.pieza, editing),
            observaciones: clearable_text(&self.observaciones, editing),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_prefill() {
        let h: HistoriaClinica = serde_json::from_value(serde_json::json!({
            "id": 5,
            "paciente": { "id": 2, "nombre": "Rosa", "apellido": "Paz" },
            "proformaId": 12,
            "fecha": "2024-06-01T10:00:00Z",
            "motivoConsulta": "Dolor molar",
            "pieza": "36"
        }))
        .unwrap();
        let form = HistoriaClinicaForm::from_entity(&h);
        assert_eq!(form.paciente_id, Some(2));
        assert_eq!(form.proforma_id, Some(12));
        assert_eq!(form.fecha, "2024-06-01");
        assert_eq!(form.pieza, "36");
        assert_eq!(form.diagnostico, "");
    }
}
