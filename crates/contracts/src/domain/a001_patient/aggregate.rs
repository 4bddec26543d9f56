use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::phone::{join_phone, split_phone, DEFAULT_COUNTRY_CODE};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Пациент клиники
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paciente {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub ci: String,
    #[serde(default)]
    pub fecha_nacimiento: Option<String>,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub alergias: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl Paciente {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

impl Resource for Paciente {
    const PATH: &'static str = "/pacientes";
    const KEY: &'static str = "a001_patient";
    const TITLE: &'static str = "Pacientes";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for Paciente {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Nombre completo").weighted(2.0),
            ReportColumn::new("CI"),
            ReportColumn::center("F. Nacimiento"),
            ReportColumn::new("Teléfono"),
            ReportColumn::new("Email").weighted(1.5),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.full_name(),
            self.ci.clone(),
            self.fecha_nacimiento
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
            self.telefono.clone(),
            self.email.clone().unwrap_or_default(),
            self.estado.label().to_string(),
        ]
    }
}

/// Тело POST/PATCH пациента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PacienteDto {
    pub nombre: String,
    pub apellido: String,
    pub ci: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alergias: Clearable<String>,
}

/// Состояние формы пациента; телефон разделён на код страны и номер
#[derive(Debug, Clone, PartialEq)]
pub struct PacienteForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub ci: String,
    pub fecha_nacimiento: String,
    pub codigo_pais: String,
    pub telefono: String,
    pub email: String,
    pub direccion: String,
    pub alergias: String,
}

impl Default for PacienteForm {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            apellido: String::new(),
            ci: String::new(),
            fecha_nacimiento: String::new(),
            codigo_pais: DEFAULT_COUNTRY_CODE.to_string(),
            telefono: String::new(),
            email: String::new(),
            direccion: String::new(),
            alergias: String::new(),
        }
    }
}

impl PacienteForm {
    pub fn from_entity(p: &Paciente) -> Self {
        let (codigo_pais, telefono) = split_phone(&p.telefono);
        Self {
            id: Some(p.id),
            nombre: p.nombre.clone(),
            apellido: p.apellido.clone(),
            ci: p.ci.clone(),
            fecha_nacimiento: p
                .fecha_nacimiento
                .as_deref()
                .map(input_date)
                .unwrap_or_default(),
            codigo_pais,
            telefono,
            email: p.email.clone().unwrap_or_default(),
            direccion: p.direccion.clone().unwrap_or_default(),
            alergias: p.alergias.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> PacienteDto {
        let editing = self.id.is_some();
        PacienteDto {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            ci: self.ci.trim().to_string(),
            telefono: join_phone(&self.codigo_pais, &self.telefono),
            fecha_nacimiento: clearable_text(&self.fecha_nacimiento, editing),
            email: clearable_text(&self.email, editing),
            direccion: clearable_text(&self.direccion, editing),
            alergias: clearable_text(&self.alergias, editing),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() || self.apellido.trim().is_empty() {
            return Err("Nombre y apellido son obligatorios");
        }
        if self.ci.trim().is_empty() {
            return Err("El CI es obligatorio");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Paciente {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "nombre": "Ana",
            "apellido": "Quispe",
            "ci": "1234567 LP",
            "fechaNacimiento": "1990-05-04T00:00:00.000Z",
            "telefono": "+59112345678",
            "email": "ana@example.com",
            "estado": "activo"
        }))
        .unwrap()
    }

    #[test]
    fn test_edit_prefills_every_field() {
        let form = PacienteForm::from_entity(&sample());
        assert_eq!(form.id, Some(7));
        assert_eq!(form.nombre, "Ana");
        assert_eq!(form.apellido, "Quispe");
        assert_eq!(form.ci, "1234567 LP");
        assert_eq!(form.fecha_nacimiento, "1990-05-04");
        assert_eq!(form.codigo_pais, "+591");
        assert_eq!(form.telefono, "12345678");
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.direccion, "");
    }

    #[test]
    fn test_create_payload_has_exact_fields() {
        let form = PacienteForm {
            nombre: "Luis".into(),
            apellido: "Mamani".into(),
            ci: "998877".into(),
            telefono: "71234567".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(form.to_dto()).unwrap();
        let mut keys: Vec<&str> = body
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["apellido", "ci", "nombre", "telefono"]);
        assert_eq!(body["telefono"], "+59171234567");
    }

    #[test]
    fn test_edit_sends_cleared_fields_as_null() {
        let mut form = PacienteForm::from_entity(&sample());
        form.email = "  ".into();
        form.fecha_nacimiento = String::new();
        let body = serde_json::to_value(form.to_dto()).unwrap();
        assert_eq!(body["email"], serde_json::Value::Null);
        assert_eq!(body["fechaNacimiento"], serde_json::Value::Null);
        assert_eq!(body["direccion"], serde_json::Value::Null);
        assert!(body.as_object().unwrap().contains_key("email"));
        assert_eq!(body["ci"], "1234567 LP");
    }

    #[test]
    fn test_validate() {
        assert!(PacienteForm::default().validate().is_err());
        assert!(PacienteForm::from_entity(&sample()).validate().is_ok());
    }
}
