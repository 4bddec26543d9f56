use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::domain::a001_patient::{Paciente, PacienteDto, PacienteForm};

pub type PacienteDetailsViewModel = DetailsViewModel<PacienteForm>;

impl EntityForm for PacienteForm {
    type Entity = Paciente;
    type Dto = PacienteDto;

    fn from_entity(entity: &Paciente) -> Self {
        PacienteForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        PacienteForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<PacienteDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_joins_phone() {
        let form = PacienteForm {
            nombre: " Ana ".into(),
            apellido: "Quispe".into(),
            ci: "123".into(),
            telefono: "71234567".into(),
            ..Default::default()
        };
        assert!(EntityForm::validate(&form).is_ok());
        let dto = form.payload(Some(1)).unwrap();
        assert_eq!(dto.nombre, "Ana");
        assert_eq!(dto.telefono, "+59171234567");
        assert_eq!(dto.email, None);
    }

    #[test]
    fn test_new_form_requires_ci() {
        let form = PacienteForm {
            nombre: "Ana".into(),
            apellido: "Quispe".into(),
            ..Default::default()
        };
        assert_eq!(EntityForm::id(&form), None);
        assert_eq!(EntityForm::validate(&form), Err("El CI es obligatorio"));
    }
}
