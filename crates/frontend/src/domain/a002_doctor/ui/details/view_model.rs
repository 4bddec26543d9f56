use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::domain::a002_doctor::{Doctor, DoctorDto, DoctorForm};

pub type DoctorDetailsViewModel = DetailsViewModel<DoctorForm>;

impl EntityForm for DoctorForm {
    type Entity = Doctor;
    type Dto = DoctorDto;

    fn from_entity(entity: &Doctor) -> Self {
        DoctorForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        DoctorForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<DoctorDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_required() {
        let mut form = DoctorForm {
            nombre: "Luis".into(),
            apellido: "Rojas".into(),
            ..Default::default()
        };
        assert_eq!(EntityForm::validate(&form), Err("La especialidad es obligatoria"));

        form.especialidad = "Ortodoncia".into();
        form.matricula = "  ".into();
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.especialidad, "Ortodoncia");
        assert_eq!(dto.matricula, None);
    }
}
