use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::domain::a007_payment_method::{FormaPago, FormaPagoDto, FormaPagoForm};

pub type FormaPagoDetailsViewModel = DetailsViewModel<FormaPagoForm>;

impl EntityForm for FormaPagoForm {
    type Entity = FormaPago;
    type Dto = FormaPagoDto;

    fn from_entity(entity: &FormaPago) -> Self {
        FormaPagoForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        FormaPagoForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<FormaPagoDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload() {
        let form = FormaPagoForm {
            id: Some(2),
            nombre: "QR".into(),
            descripcion: String::new(),
        };
        assert_eq!(EntityForm::id(&form), Some(2));
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.nombre, "QR");
        // при редактировании пустое описание стирает прежнее
        assert_eq!(dto.descripcion, Some(None));
    }
}
