use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::report::{ReportColumn, ReportRow};
use crate::system::auth::Rol;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub usuario: String,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rol: Rol,
    #[serde(default)]
    pub estado: Estado,
}

impl Resource for Usuario {
    const PATH: &'static str = "/usuarios";
    const KEY: &'static str = "sys_users";
    const TITLE: &'static str = "Usuarios";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for Usuario {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Usuario"),
            ReportColumn::new("Nombre").weighted(2.0),
            ReportColumn::new("Email").weighted(1.5),
            ReportColumn::center("Rol"),
            ReportColumn::center("Estado"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.usuario.clone(),
            self.nombre.clone(),
            self.email.clone().unwrap_or_default(),
            self.rol.label().to_string(),
            self.estado.label().to_string(),
        ]
    }
}

/// Тело POST/PATCH; пароль не отправляется, если поле пустое
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioDto {
    pub usuario: String,
    pub nombre: String,
    pub rol: Rol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Clearable<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UsuarioForm {
    pub id: Option<i64>,
    pub usuario: String,
    pub nombre: String,
    pub email: String,
    pub rol: Rol,
    pub password: String,
}

impl UsuarioForm {
    pub fn from_entity(u: &Usuario) -> Self {
        Self {
            id: Some(u.id),
            usuario: u.usuario.clone(),
            nombre: u.nombre.clone(),
            email: u.email.clone().unwrap_or_default(),
            rol: u.rol,
            password: String::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.usuario.trim().is_empty() {
            return Err("El nombre de usuario es obligatorio");
        }
        if self.nombre.trim().is_empty() {
            return Err("El nombre es obligatorio");
        }
        if !self.is_edit() && self.password.is_empty() {
            return Err("La contraseña es obligatoria");
        }
        Ok(())
    }

    pub fn to_dto(&self) -> UsuarioDto {
        let editing = self.id.is_some();
        UsuarioDto {
            usuario: self.usuario.trim().to_string(),
            nombre: self.nombre.trim().to_string(),
            rol: self.rol,
            email: clearable_text(&self.email, editing),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_omitted_on_edit() {
        let u = Usuario {
            id: 4,
            usuario: "recep".into(),
            nombre: "Carla".into(),
            email: None,
            rol: Rol::Recepcionista,
            estado: Estado::Activo,
        };
        let form = UsuarioForm::from_entity(&u);
        assert!(form.validate().is_ok());
        let body = serde_json::to_value(form.to_dto()).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["rol"], "recepcionista");
        assert_eq!(body["email"], serde_json::Value::Null);
    }

    #[test]
    fn test_password_required_on_create() {
        let mut form = UsuarioForm {
            usuario: "nuevo".into(),
            nombre: "Nuevo".into(),
            ..Default::default()
        };
        assert!(form.validate().is_err());
        form.password = "secreto".into();
        assert!(form.validate().is_ok());
        assert_eq!(form.to_dto().password.as_deref(), Some("secreto"));
    }
}
