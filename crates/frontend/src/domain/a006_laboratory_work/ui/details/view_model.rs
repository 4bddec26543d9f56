use crate::shared::form_vm::{DetailsViewModel, EntityForm, INCOMPLETE_FORM};
use contracts::domain::a006_laboratory_work::{
    EstadoTrabajo, TrabajoLaboratorio, TrabajoLaboratorioDto, TrabajoLaboratorioForm,
};

pub type TrabajoLaboratorioDetailsViewModel = DetailsViewModel<TrabajoLaboratorioForm>;

impl EntityForm for TrabajoLaboratorioForm {
    type Entity = TrabajoLaboratorio;
    type Dto = TrabajoLaboratorioDto;

    fn from_entity(entity: &TrabajoLaboratorio) -> Self {
        TrabajoLaboratorioForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        TrabajoLaboratorioForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<TrabajoLaboratorioDto, &'static str> {
        self.to_dto().ok_or(INCOMPLETE_FORM)
    }
}

/// Пункты списка этапов: (код, подпись)
pub fn estado_trabajo_options() -> Vec<(String, String)> {
    EstadoTrabajo::ALL
        .iter()
        .map(|e| (e.code().to_string(), e.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_without_laboratory() {
        let form = TrabajoLaboratorioForm {
            paciente_id: Some(3),
            descripcion: "Corona".into(),
            ..Default::default()
        };
        assert_eq!(form.payload(None), Err(INCOMPLETE_FORM));
    }

    #[test]
    fn test_payload_keeps_stage() {
        let form = TrabajoLaboratorioForm {
            laboratorio_id: Some(1),
            paciente_id: Some(3),
            descripcion: "Corona".into(),
            estado_trabajo: EstadoTrabajo::Terminado,
            costo: 850.0,
            ..Default::default()
        };
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.estado_trabajo, EstadoTrabajo::Terminado);
        assert_eq!(dto.doctor_id, None);
    }

    #[test]
    fn test_stage_options_in_order() {
        let options = estado_trabajo_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[1], ("en_proceso".to_string(), "En proceso".to_string()));
    }
}
