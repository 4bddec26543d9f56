use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::phone::{join_phone, split_phone, DEFAULT_COUNTRY_CODE};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub especialidad: String,
    /// Номер регистрации в коллегии
    #[serde(default)]
    pub matricula: Option<String>,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("Dr(a). {} {}", self.nombre, self.apellido)
    }
}

impl Resource for Doctor {
    const PATH: &'static str = "/doctors";
    const KEY: &'static str = "a002_doctor";
    const TITLE: &'static str = "Doctores";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for Doctor {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Doctor").weighted(2.0),
            ReportColumn::new("Especialidad").weighted(1.5),
            ReportColumn::new("Matrícula"),
            ReportColumn::new("Teléfono"),
            ReportColumn::new("Email").weighted(1.5),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.nombre, self.apellido),
            self.especialidad.clone(),
            self.matricula.clone().unwrap_or_default(),
            self.telefono.clone(),
            self.email.clone().unwrap_or_default(),
            self.estado.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDto {
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Clearable<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub especialidad: String,
    pub matricula: String,
    pub codigo_pais: String,
    pub telefono: String,
    pub email: String,
}

impl Default for DoctorForm {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            apellido: String::new(),
            especialidad: String::new(),
            matricula: String::new(),
            codigo_pais: DEFAULT_COUNTRY_CODE.to_string(),
            telefono: String::new(),
            email: String::new(),
        }
    }
}

impl DoctorForm {
    pub fn from_entity(d: &Doctor) -> Self {
        let (codigo_pais, telefono) = split_phone(&d.telefono);
        Self {
            id: Some(d.id),
            nombre: d.nombre.clone(),
            apellido: d.apellido.clone(),
            especialidad: d.especialidad.clone(),
            matricula: d.matricula.clone().unwrap_or_default(),
            codigo_pais,
            telefono,
            email: d.email.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> DoctorDto {
        let editing = self.id.is_some();
        DoctorDto {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            especialidad: self.especialidad.trim().to_string(),
            telefono: join_phone(&self.codigo_pais, &self.telefono),
            matricula: clearable_text(&self.matricula, editing),
            email: clearable_text(&self.email, editing),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() || self.apellido.trim().is_empty() {
            return Err("Nombre y apellido son obligatorios");
        }
        if self.especialidad.trim().is_empty() {
            return Err("La especialidad es obligatoria");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_keeps_phone() {
        let d: Doctor = serde_json::from_value(serde_json::json!({
            "id": 3,
            "nombre": "Carla",
            "apellido": "Rojas",
            "especialidad": "Ortodoncia",
            "telefono": "+56912345678"
        }))
        .unwrap();
        let form = DoctorForm::from_entity(&d);
        assert_eq!(form.codigo_pais, "+56");
        assert_eq!(form.telefono, "912345678");
        assert_eq!(form.to_dto().telefono, "+56912345678");
        // у врача не было матрикулы: при сохранении уходит `null`
        assert_eq!(form.to_dto().matricula, Some(None));
    }
}
