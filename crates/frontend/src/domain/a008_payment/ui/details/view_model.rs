use crate::shared::form_vm::{DetailsViewModel, EntityForm, INCOMPLETE_FORM};
use contracts::domain::a008_payment::{Pago, PagoDto, PagoForm};

pub type PagoDetailsViewModel = DetailsViewModel<PagoForm>;

impl EntityForm for PagoForm {
    type Entity = Pago;
    type Dto = PagoDto;

    fn from_entity(entity: &Pago) -> Self {
        PagoForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        PagoForm::validate(self)
    }

    /// Автор платежа берётся из сессии
    fn payload(&self, usuario_id: Option<i64>) -> Result<PagoDto, &'static str> {
        self.to_dto(usuario_id).ok_or(INCOMPLETE_FORM)
    }
}

/// Новый платёж датируется сегодняшним днём
pub fn new_pago_form(fecha: String) -> PagoForm {
    PagoForm {
        fecha,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_stamps_author() {
        let form = PagoForm {
            paciente_id: Some(4),
            forma_pago_id: Some(1),
            monto: 250.0,
            fecha: "2024-06-01".into(),
            ..Default::default()
        };
        assert!(EntityForm::validate(&form).is_ok());
        let dto = form.payload(Some(9)).unwrap();
        assert_eq!(dto.usuario_id, Some(9));
        assert_eq!(dto.proforma_id, None);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let form = PagoForm {
            paciente_id: Some(4),
            forma_pago_id: Some(1),
            fecha: "2024-06-01".into(),
            ..Default::default()
        };
        assert_eq!(EntityForm::validate(&form), Err("El monto debe ser mayor a cero"));
    }
}
