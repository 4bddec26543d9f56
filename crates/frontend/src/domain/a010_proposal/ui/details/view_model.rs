use crate::shared::components::treatment_lines::IndexedLines;
use crate::shared::form_vm::{DetailsViewModel, EntityForm, INCOMPLETE_FORM};
use contracts::domain::a010_proposal::{Propuesta, PropuestaDto, PropuestaForm, Variante};
use contracts::domain::common::TreatmentLine;

pub type PropuestaDetailsViewModel = DetailsViewModel<PropuestaForm>;

impl EntityForm for PropuestaForm {
    type Entity = Propuesta;
    type Dto = PropuestaDto;

    fn from_entity(entity: &Propuesta) -> Self {
        PropuestaForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        PropuestaForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<PropuestaDto, &'static str> {
        self.to_dto().ok_or(INCOMPLETE_FORM)
    }
}

/// Новое предложение начинается с пустой строки варианта A
pub fn new_propuesta_form(fecha: String) -> PropuestaForm {
    let mut form = PropuestaForm {
        fecha,
        ..Default::default()
    };
    form.add_item(Variante::A);
    form
}

/// Строки одного варианта с индексами в общем векторе
pub fn option_lines(form: &PropuestaForm, opcion: Variante) -> IndexedLines {
    form.items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.opcion == opcion)
        .map(|(index, item)| (index, item.linea.clone()))
        .collect()
}

pub fn set_line(form: &mut PropuestaForm, index: usize, line: TreatmentLine) {
    if let Some(item) = form.items.get_mut(index) {
        item.linea = line;
    }
}

/// Добавляет следующий свободный вариант; `false`, если заняты все шесть
pub fn add_option(form: &mut PropuestaForm) -> bool {
    match form.next_option() {
        Some(next) => {
            form.add_item(next);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_lines_keep_form_indexes() {
        let mut form = new_propuesta_form("2024-05-02".to_string());
        assert!(add_option(&mut form));
        form.add_item(Variante::A);
        set_line(&mut form, 2, TreatmentLine::new("Implante", 1.0, 5000.0));

        let a = option_lines(&form, Variante::A);
        assert_eq!(a.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(form.total_for(Variante::A), 5000.0);
        assert_eq!(option_lines(&form, Variante::B).len(), 1);
    }

    #[test]
    fn test_add_option_stops_after_f() {
        let mut form = new_propuesta_form("2024-05-02".to_string());
        for _ in 0..5 {
            assert!(add_option(&mut form));
        }
        assert_eq!(form.options().len(), 6);
        assert!(!add_option(&mut form));
    }

    #[test]
    fn test_payload_drops_blank_lines() {
        let mut form = new_propuesta_form("2024-05-02".to_string());
        form.paciente_id = Some(3);
        add_option(&mut form);
        set_line(&mut form, 1, TreatmentLine::new("Puente", 1.0, 2400.0));
        let dto = form.payload(None).unwrap();
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].opcion, Variante::B);
    }
}
