use crate::domain::common::{
    clearable_id, clearable_text, display_ref, Clearable, Estado, NamedRef, PersonRef, Resource,
};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::money::format_money;
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Этап работы в лаборатории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EstadoTrabajo {
    #[default]
    Pendiente,
    EnProceso,
    Terminado,
    Entregado,
}

impl EstadoTrabajo {
    pub const ALL: [EstadoTrabajo; 4] = [
        EstadoTrabajo::Pendiente,
        EstadoTrabajo::EnProceso,
        EstadoTrabajo::Terminado,
        EstadoTrabajo::Entregado,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EstadoTrabajo::Pendiente => "Pendiente",
            EstadoTrabajo::EnProceso => "En proceso",
            EstadoTrabajo::Terminado => "Terminado",
            EstadoTrabajo::Entregado => "Entregado",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EstadoTrabajo::Pendiente => "pendiente",
            EstadoTrabajo::EnProceso => "en_proceso",
            EstadoTrabajo::Terminado => "terminado",
            EstadoTrabajo::Entregado => "entregado",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or_default()
    }
}

/// Заказ в зуботехническую лабораторию
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoLaboratorio {
    pub id: i64,
    #[serde(default)]
    pub laboratorio: Option<NamedRef>,
    #[serde(default)]
    pub paciente: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub pieza: Option<String>,
    #[serde(default)]
    pub fecha_envio: Option<String>,
    #[serde(default)]
    pub fecha_entrega: Option<String>,
    #[serde(default)]
    pub costo: f64,
    #[serde(default)]
    pub estado_trabajo: EstadoTrabajo,
    #[serde(default)]
    pub estado: Estado,
}

impl TrabajoLaboratorio {
    pub fn laboratorio_nombre(&self) -> String {
        self.laboratorio
            .as_ref()
            .map(|l| l.nombre.clone())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Resource for TrabajoLaboratorio {
    const PATH: &'static str = "/trabajos-laboratorio";
    const KEY: &'static str = "a006_laboratory_work";
    const TITLE: &'static str = "Trabajos de laboratorio";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for TrabajoLaboratorio {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Laboratorio").weighted(1.5),
            ReportColumn::new("Paciente").weighted(1.5),
            ReportColumn::new("Doctor").weighted(1.5),
            ReportColumn::new("Trabajo").weighted(2.0),
            ReportColumn::center("Envío"),
            ReportColumn::center("Entrega"),
            ReportColumn::right("Costo"),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.laboratorio_nombre(),
            display_ref(&self.paciente),
            display_ref(&self.doctor),
            self.descripcion.clone(),
            self.fecha_envio.as_deref().map(format_date).unwrap_or_default(),
            self.fecha_entrega.as_deref().map(format_date).unwrap_or_default(),
            format_money(self.costo),
            self.estado_trabajo.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrabajoLaboratorioDto {
    pub laboratorio_id: i64,
    pub paciente_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Clearable<i64>,
    pub descripcion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pieza: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_envio: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_entrega: Clearable<String>,
    pub costo: f64,
    pub estado_trabajo: EstadoTrabajo,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrabajoLaboratorioForm {
    pub id: Option<i64>,
    pub laboratorio_id: Option<i64>,
    pub paciente_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub descripcion: String,
    pub pieza: String,
    pub fecha_envio: String,
    pub fecha_entrega: String,
    pub costo: f64,
    pub estado_trabajo: EstadoTrabajo,
}

impl TrabajoLaboratorioForm {
    pub fn from_entity(t: &TrabajoLaboratorio) -> Self {
        Self {
            id: Some(t.id),
            laboratorio_id: t.laboratorio.as_ref().map(|l| l.id),
            paciente_id: t.paciente.as_ref().map(|p| p.id),
            doctor_id: t.doctor.as_ref().map(|d| d.id),
            descripcion: t.descripcion.clone(),
            pieza: t.pieza.clone().unwrap_or_default(),
            fecha_envio: t.fecha_envio.as_deref().map(input_date).unwrap_or_default(),
            fecha_entrega: t.fecha_entrega.as_deref().map(input_date).unwrap_or_default(),
            costo: t.costo,
            estado_trabajo: t.estado_trabajo,
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.laboratorio_id.is_none() {
            return Err("Seleccione un laboratorio");
        }
        if self.paciente_id.is_none() {
            return Err("Seleccione un paciente");
        }
        if self.descripcion.trim().is_empty() {
            return Err("Describa el trabajo solicitado");
        }
        Ok(())
    }

    /// DTO для отправки; `None`, если не выбраны обязательные связи
    pub fn to_dto(&self) -> Option<TrabajoLaboratorioDto> {
        let editing = self.id.is_some();
        Some(TrabajoLaboratorioDto {
            laboratorio_id: self.laboratorio_id?,
            paciente_id: self.paciente_id?,
            doctor_id: clearable_id(self.doctor_id, editing),
            descripcion: self.descripcion.trim().to_string(),
            pieza: clearable_text(&self.pieza, editing),
            fecha_envio: clearable_text(&self.fecha_envio, editing),
            fecha_entrega: clearable_text(&self.fecha_entrega, editing),
            costo: self.costo,
            estado_trabajo: self.estado_trabajo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_relations() {
        let t: TrabajoLaboratorio = serde_json::from_value(serde_json::json!({
            "id": 4,
            "laboratorio": { "id": 2, "nombre": "DentLab" },
            "paciente": { "id": 9, "nombre": "Ana", "apellido": "Rojas" },
            "descripcion": "Corona zirconio",
            "costo": 850.0,
            "estadoTrabajo": "en_proceso"
        }))
        .unwrap();
        assert_eq!(t.laboratorio_nombre(), "DentLab");
        assert_eq!(t.estado_trabajo, EstadoTrabajo::EnProceso);
        let cells = t.report_cells();
        assert_eq!(cells[1], "Ana Rojas");
        assert_eq!(cells[2], "-");
    }

    #[test]
    fn test_dto_requires_relations() {
        let mut form = TrabajoLaboratorioForm {
            descripcion: "Puente".into(),
            paciente_id: Some(1),
            ..Default::default()
        };
        assert!(form.to_dto().is_none());
        form.laboratorio_id = Some(3);
        let body = serde_json::to_value(form.to_dto().unwrap()).unwrap();
        assert_eq!(body["laboratorioId"], 3);
        assert_eq!(body["estadoTrabajo"], "pendiente");
        assert!(body.get("doctorId").is_none());
    }
}
