use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::phone::{join_phone, split_phone, DEFAULT_COUNTRY_CODE};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Внешняя зуботехническая лаборатория
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laboratorio {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl Resource for Laboratorio {
    const PATH: &'static str = "/laboratorios";
    const KEY: &'static str = "a005_laboratory";
    const TITLE: &'static str = "Laboratorios";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for Laboratorio {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Laboratorio").weighted(2.0),
            ReportColumn::new("Contacto").weighted(1.5),
            ReportColumn::new("Teléfono"),
            ReportColumn::new("Dirección").weighted(2.0),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.contacto.clone().unwrap_or_default(),
            self.telefono.clone(),
            self.direccion.clone().unwrap_or_default(),
            self.estado.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaboratorioDto {
    pub nombre: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacto: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Clearable<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaboratorioForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub contacto: String,
    pub codigo_pais: String,
    pub telefono: String,
    pub direccion: String,
    pub email: String,
}

impl Default for LaboratorioForm {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            contacto: String::new(),
            codigo_pais: DEFAULT_COUNTRY_CODE.to_string(),
            telefono: String::new(),
            direccion: String::new(),
            email: String::new(),
        }
    }
}

impl LaboratorioForm {
    pub fn from_entity(l: &Laboratorio) -> Self {
        let (codigo_pais, telefono) = split_phone(&l.telefono);
        Self {
            id: Some(l.id),
            nombre: l.nombre.clone(),
            contacto: l.contacto.clone().unwrap_or_default(),
            codigo_pais,
            telefono,
            direccion: l.direccion.clone().unwrap_or_default(),
            email: l.email.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> LaboratorioDto {
        let editing = self.id.is_some();
        LaboratorioDto {
            nombre: self.nombre.trim().to_string(),
            telefono: join_phone(&self.codigo_pais, &self.telefono),
            contacto: clearable_text(&self.contacto, editing),
            direccion: clearable_text(&self.direccion, editing),
            email: clearable_text(&self.email, editing),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre del laboratorio es obligatorio");
        }
        Ok(())
    }
}
