use crate::shared::form_vm::{DetailsViewModel, EntityForm, INCOMPLETE_FORM};
use contracts::domain::a011_clinical_history::{
    HistoriaClinica, HistoriaClinicaDto, HistoriaClinicaForm,
};

pub type HistoriaClinicaDetailsViewModel = DetailsViewModel<HistoriaClinicaForm>;

impl EntityForm for HistoriaClinicaForm {
    type Entity = HistoriaClinica;
    type Dto = HistoriaClinicaDto;

    fn from_entity(entity: &HistoriaClinica) -> Self {
        HistoriaClinicaForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        HistoriaClinicaForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<HistoriaClinicaDto, &'static str> {
        self.to_dto().ok_or(INCOMPLETE_FORM)
    }
}

pub fn new_historia_form(fecha: String) -> HistoriaClinicaForm {
    HistoriaClinicaForm {
        fecha,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_required() {
        let form = HistoriaClinicaForm {
            paciente_id: Some(1),
            fecha: "2024-02-10".into(),
            ..Default::default()
        };
        assert_eq!(
            EntityForm::validate(&form),
            Err("El motivo de consulta es obligatorio")
        );
    }

    #[test]
    fn test_payload_optional_fields() {
        let form = HistoriaClinicaForm {
            paciente_id: Some(1),
            proforma_id: Some(12),
            fecha: "2024-02-10".into(),
            motivo_consulta: "Dolor molar".into(),
            pieza: "36".into(),
            ..Default::default()
        };
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.proforma_id, Some(Some(12)));
        assert_eq!(dto.pieza, Some(Some("36".to_string())));
        assert_eq!(dto.diagnostico, None);
    }
}
