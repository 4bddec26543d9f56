use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::domain::a005_laboratory::{Laboratorio, LaboratorioDto, LaboratorioForm};

pub type LaboratorioDetailsViewModel = DetailsViewModel<LaboratorioForm>;

impl EntityForm for LaboratorioForm {
    type Entity = Laboratorio;
    type Dto = LaboratorioDto;

    fn from_entity(entity: &Laboratorio) -> Self {
        LaboratorioForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        LaboratorioForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<LaboratorioDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required() {
        let form = LaboratorioForm::default();
        assert_eq!(
            EntityForm::validate(&form),
            Err("El nombre del laboratorio es obligatorio")
        );
    }

    #[test]
    fn test_payload_with_foreign_code() {
        let form = LaboratorioForm {
            nombre: "Dental Lab".into(),
            codigo_pais: "+51".into(),
            telefono: "987 654 321".into(),
            ..Default::default()
        };
        assert_eq!(form.payload(None).unwrap().telefono, "+51987654321");
    }
}
