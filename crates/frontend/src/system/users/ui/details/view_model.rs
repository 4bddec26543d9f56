use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::system::auth::Rol;
use contracts::system::users::{Usuario, UsuarioDto, UsuarioForm};

pub type UsuarioDetailsViewModel = DetailsViewModel<UsuarioForm>;

impl EntityForm for UsuarioForm {
    type Entity = Usuario;
    type Dto = UsuarioDto;

    fn from_entity(entity: &Usuario) -> Self {
        UsuarioForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        UsuarioForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<UsuarioDto, &'static str> {
        Ok(self.to_dto())
    }
}

pub fn rol_options() -> Vec<(String, String)> {
    Rol::ALL
        .iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}

/// Подсказка под полем пароля
pub fn password_hint(is_edit: bool) -> &'static str {
    if is_edit {
        "Deje en blanco para mantener la contraseña actual"
    } else {
        "Mínimo recomendado: 8 caracteres"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_without_password() {
        let form = UsuarioForm {
            id: Some(2),
            usuario: "dra.lopez".into(),
            nombre: "Marta López".into(),
            rol: Rol::Doctor,
            ..Default::default()
        };
        assert!(EntityForm::validate(&form).is_ok());
        assert_eq!(form.payload(None).unwrap().password, None);
        assert!(password_hint(true).contains("blanco"));
    }

    #[test]
    fn test_rol_options() {
        let options = rol_options();
        assert_eq!(options[0], ("administrador".to_string(), "Administrador".to_string()));
        assert_eq!(options.len(), 3);
    }
}
