use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::phone::{join_phone, split_phone, DEFAULT_COUNTRY_CODE};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Сотрудник клиники, не являющийся доктором (ассистенты, регистратура)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub ci: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub fecha_ingreso: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl Resource for Personal {
    const PATH: &'static str = "/personal";
    const KEY: &'static str = "a003_staff";
    const TITLE: &'static str = "Personal";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for Personal {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Nombre completo").weighted(2.0),
            ReportColumn::new("CI"),
            ReportColumn::new("Cargo").weighted(1.5),
            ReportColumn::new("Teléfono"),
            ReportColumn::center("F. Ingreso"),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            format!("{} {}", self.nombre, self.apellido),
            self.ci.clone(),
            self.cargo.clone(),
            self.telefono.clone(),
            self.fecha_ingreso
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
            self.estado.label().to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDto {
    pub nombre: String,
    pub apellido: String,
    pub ci: String,
    pub cargo: String,
    pub telefono: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_ingreso: Clearable<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub ci: String,
    pub cargo: String,
    pub codigo_pais: String,
    pub telefono: String,
    pub email: String,
    pub fecha_ingreso: String,
}

impl Default for PersonalForm {
    fn default() -> Self {
        Self {
            id: None,
            nombre: String::new(),
            apellido: String::new(),
            ci: String::new(),
            cargo: String::new(),
            codigo_pais: DEFAULT_COUNTRY_CODE.to_string(),
            telefono: String::new(),
            email: String::new(),
            fecha_ingreso: String::new(),
        }
    }
}

impl PersonalForm {
    pub fn from_entity(p: &Personal) -> Self {
        let (codigo_pais, telefono) = split_phone(&p.telefono);
        Self {
            id: Some(p.id),
            nombre: p.nombre.clone(),
            apellido: p.apellido.clone(),
            ci: p.ci.clone(),
            cargo: p.cargo.clone(),
            codigo_pais,
            telefono,
            email: p.email.clone().unwrap_or_default(),
            fecha_ingreso: p
                .fecha_ingreso
                .as_deref()
                .map(input_date)
                .unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> PersonalDto {
        let editing = self.id.is_some();
        PersonalDto {
            nombre: self.nombre.trim().to_string(),
            apellido: self.apellido.trim().to_string(),
            ci: self.ci.trim().to_string(),
            cargo: self.cargo.trim().to_string(),
            telefono: join_phone(&self.codigo_pais, &self.telefono),
            email: clearable_text(&self.email, editing),
            fecha_ingreso: clearable_text(&self.fecha_ingreso, editing),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() || self.apellido.trim().is_empty() {
            return Err("Nombre y apellido son obligatorios");
        }
        if self.cargo.trim().is_empty() {
            return Err("El cargo es obligatorio");
        }
        Ok(())
    }
}
