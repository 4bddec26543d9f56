use crate::shared::components::treatment_lines::IndexedLines;
use crate::shared::form_vm::{DetailsViewModel, EntityForm, INCOMPLETE_FORM};
use contracts::domain::a009_proforma::{Proforma, ProformaDto, ProformaForm};
use contracts::domain::common::TreatmentLine;
use contracts::shared::amount_in_words::amount_in_words;
use contracts::shared::money::format_bs;

pub type ProformaDetailsViewModel = DetailsViewModel<ProformaForm>;

impl EntityForm for ProformaForm {
    type Entity = Proforma;
    type Dto = ProformaDto;

    fn from_entity(entity: &Proforma) -> Self {
        ProformaForm::from_entity(entity)
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), &'static str> {
        ProformaForm::validate(self)
    }

    fn payload(&self, _usuario_id: Option<i64>) -> Result<ProformaDto, &'static str> {
        self.to_dto().ok_or(INCOMPLETE_FORM)
    }
}

/// Новая проформа: сегодняшняя дата и одна пустая строка
pub fn new_proforma_form(fecha: String) -> ProformaForm {
    let mut form = ProformaForm {
        fecha,
        ..Default::default()
    };
    form.add_item();
    form
}

pub fn indexed_lines(form: &ProformaForm) -> IndexedLines {
    form.items.iter().cloned().enumerate().collect()
}

pub fn set_line(form: &mut ProformaForm, index: usize, line: TreatmentLine) {
    if let Some(slot) = form.items.get_mut(index) {
        *slot = line;
    }
}

/// Итог и сумма прописью для блока под таблицей
pub fn total_summary(total: f64) -> (String, String) {
    (format_bs(total), amount_in_words(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_has_one_blank_line() {
        let form = new_proforma_form("2024-05-02".to_string());
        assert_eq!(form.items.len(), 1);
        assert_eq!(form.items[0].cantidad, 1.0);
        assert_eq!(form.fecha, "2024-05-02");
        assert_eq!(EntityForm::validate(&form), Err("Seleccione un paciente"));
    }

    #[test]
    fn test_set_line_updates_total() {
        let mut form = new_proforma_form("2024-05-02".to_string());
        form.paciente_id = Some(1);
        set_line(&mut form, 0, TreatmentLine::new("Limpieza", 2.0, 150.0));
        set_line(&mut form, 5, TreatmentLine::new("Fuera de rango", 1.0, 1.0));
        assert_eq!(form.total(), 300.0);
        assert_eq!(indexed_lines(&form).len(), 1);

        let dto = form.payload(None).unwrap();
        assert_eq!(dto.total, 300.0);
    }

    #[test]
    fn test_total_summary() {
        let (money, words) = total_summary(1234.56);
        assert_eq!(money, "Bs. 1.234,56");
        assert_eq!(words, "MIL DOSCIENTOS TREINTA Y CUATRO 56/100 BOLIVIANOS");
    }
}
