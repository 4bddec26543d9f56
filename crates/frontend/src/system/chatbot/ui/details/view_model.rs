use crate::shared::form_vm::{DetailsViewModel, EntityForm};
use contracts::system::chatbot::{RespuestaChatbot, RespuestaChatbotDto, RespuestaChatbotForm};

pub type RespuestaChatbotDetailsViewModel = DetailsViewModel<RespuestaChatbotForm>;

impl EntityForm for RespuestaChatbotForm {
    type Entity = RespuestaChatbot;
    type Dto = RespuestaChatbotDto;

    fn from_entity(entity: &RespuestaChatbot) -> Self {
        RespuestaChatbotForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        RespuestaChatbotForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<RespuestaChatbotDto, &'static str> {
        Ok(self.to_dto())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lowercased() {
        let form = RespuestaChatbotForm {
            id: None,
            palabra_clave: " Horario ".into(),
            respuesta: "Lunes a viernes de 8:00 a 19:00".into(),
        };
        assert_eq!(form.payload(None).unwrap().palabra_clave, "horario");
    }
}
