use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::domain::a003_staff::{Personal, PersonalDto, PersonalForm};

pub type PersonalDetailsViewModel = DetailsViewModel<PersonalForm>;

impl EntityForm for PersonalForm {
    type Entity = Personal;
    type Dto = PersonalDto;

    fn from_entity(entity: &Personal) -> Self {
        PersonalForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        PersonalForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<PersonalDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_required() {
        let form = PersonalForm {
            nombre: "Rosa".into(),
            apellido: "Mamani".into(),
            ..Default::default()
        };
        assert_eq!(EntityForm::validate(&form), Err("El cargo es obligatorio"));
    }

    #[test]
    fn test_payload_skips_empty_date() {
        let form = PersonalForm {
            nombre: "Rosa".into(),
            apellido: "Mamani".into(),
            cargo: "Asistente".into(),
            ..Default::default()
        };
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.fecha_ingreso, None);
        assert_eq!(dto.telefono, "");
    }
}
