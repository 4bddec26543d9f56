use crate::domain::common::{
    clearable_id, clearable_text, display_ref, lines_total, linked_records_reason, Clearable,
    DeleteGuard, PersonRef, Resource, TreatmentLine,
};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::money::{format_money, sum_totals};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Вариант лечения в предложении (A–F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Variante {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Variante {
    pub const ALL: [Variante; 6] = [
        Variante::A,
        Variante::B,
        Variante::C,
        Variante::D,
        Variante::E,
        Variante::F,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            Variante::A => "A",
            Variante::B => "B",
            Variante::C => "C",
            Variante::D => "D",
            Variante::E => "E",
            Variante::F => "F",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.letter() == letter)
    }

    pub fn label(&self) -> String {
        format!("Opción {}", self.letter())
    }
}

/// Строка предложения, привязанная к варианту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropuestaItem {
    #[serde(default)]
    pub opcion: Variante,
    #[serde(flatten)]
    pub linea: TreatmentLine,
}

impl PropuestaItem {
    pub fn new(opcion: Variante, linea: TreatmentLine) -> Self {
        Self { opcion, linea }
    }
}

/// Предложение лечения с несколькими вариантами для сравнения цены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Propuesta {
    pub id: i64,
    #[serde(default)]
    pub paciente: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub items: Vec<PropuestaItem>,
    #[serde(default)]
    pub tiene_pagos: bool,
    #[serde(default)]
    pub tiene_historia_clinica: bool,
}

/// Варианты, у которых есть строки, по порядку букв
fn used_options(items: &[PropuestaItem]) -> Vec<Variante> {
    let mut out: Vec<Variante> = items.iter().map(|i| i.opcion).collect();
    out.sort();
    out.dedup();
    out
}

fn lines_for(items: &[PropuestaItem], opcion: Variante) -> Vec<TreatmentLine> {
    items
        .iter()
        .filter(|i| i.opcion == opcion)
        .map(|i| i.linea.clone())
        .collect()
}

impl Propuesta {
    pub fn numero(&self) -> String {
        format!("PR-{:05}", self.id)
    }

    pub fn options(&self) -> Vec<Variante> {
        used_options(&self.items)
    }

    pub fn lines_for(&self, opcion: Variante) -> Vec<TreatmentLine> {
        lines_for(&self.items, opcion)
    }

    pub fn total_for(&self, opcion: Variante) -> f64 {
        lines_total(&self.lines_for(opcion))
    }

    /// Итоги по вариантам для таблицы сравнения
    pub fn totals(&self) -> Vec<(Variante, f64)> {
        self.options()
            .into_iter()
            .map(|v| (v, self.total_for(v)))
            .collect()
    }

    /// Диапазон цен "min - max" для списка
    pub fn range_label(&self) -> String {
        let totals: Vec<f64> = self.totals().into_iter().map(|(_, t)| t).collect();
        match (
            totals.iter().cloned().reduce(f64::min),
            totals.iter().cloned().reduce(f64::max),
        ) {
            (Some(lo), Some(hi)) if lo == hi => format_money(lo),
            (Some(lo), Some(hi)) => format!("{} - {}", format_money(lo), format_money(hi)),
            _ => format_money(0.0),
        }
    }
}

impl DeleteGuard for Propuesta {
    fn delete_blocked_reason(&self) -> Option<&'static str> {
        linked_records_reason(self.tiene_pagos, self.tiene_historia_clinica)
    }
}

impl Resource for Propuesta {
    const PATH: &'static str = "/propuestas";
    const KEY: &'static str = "a010_proposal";
    const TITLE: &'static str = "Propuestas";
    const SOFT_DELETE: bool = false;

    fn id(&self) -> i64 {
        self.id
    }
}

impl ReportRow for Propuesta {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::center("N°"),
            ReportColumn::center("Fecha"),
            ReportColumn::new("Paciente").weighted(2.0),
            ReportColumn::new("Doctor").weighted(2.0),
            ReportColumn::center("Opciones"),
            ReportColumn::right("Rango (Bs.)").weighted(1.5),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.numero(),
            self.fecha.as_deref().map(format_date).unwrap_or_default(),
            display_ref(&self.paciente),
            display_ref(&self.doctor),
            self.options()
                .iter()
                .map(Variante::letter)
                .collect::<Vec<_>>()
                .join(", "),
            self.range_label(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropuestaDto {
    pub paciente_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Clearable<i64>,
    pub fecha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Clearable<String>,
    pub items: Vec<PropuestaItem>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropuestaForm {
    pub id: Option<i64>,
    pub paciente_id: Option<i64>,
    pub doctor_id: Option<i64>,
    pub fecha: String,
    pub descripcion: String,
    pub items: Vec<PropuestaItem>,
}

impl PropuestaForm {
    pub fn from_entity(p: &Propuesta) -> Self {
        Self {
            id: Some(p.id),
            paciente_id: p.paciente.as_ref().map(|r| r.id),
            doctor_id: p.doctor.as_ref().map(|r| r.id),
            fecha: p.fecha.as_deref().map(input_date).unwrap_or_default(),
            descripcion: p.descripcion.clone().unwrap_or_default(),
            items: p.items.clone(),
        }
    }

    pub fn add_item(&mut self, opcion: Variante) {
        self.items.push(PropuestaItem::new(
            opcion,
            TreatmentLine {
                cantidad: 1.0,
                ..Default::default()
            },
        ));
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn options(&self) -> Vec<Variante> {
        used_options(&self.items)
    }

    pub fn total_for(&self, opcion: Variante) -> f64 {
        lines_total(&lines_for(&self.items, opcion))
    }

    /// Следующая свободная буква для кнопки "agregar opción"
    pub fn next_option(&self) -> Option<Variante> {
        let used = self.options();
        Variante::ALL.into_iter().find(|v| !used.contains(v))
    }

    pub fn grand_total(&self) -> f64 {
        sum_totals(self.options().into_iter().map(|v| self.total_for(v)))
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.paciente_id.is_none() {
            return Err("Seleccione un paciente");
        }
        if self.fecha.trim().is_empty() {
            return Err("La fecha es obligatoria");
        }
        if self.items.iter().all(|i| i.linea.is_blank()) {
            return Err("Agregue al menos un tratamiento");
        }
        Ok(())
    }

    pub fn to_dto(&self) -> Option<PropuestaDto> {
        let editing = self.id.is_some();
        Some(PropuestaDto {
            paciente_id: self.paciente_id?,
            doctor_id: clearable_id(self.doctor_id, editing),
            fecha: self.fecha.trim().to_string(),
            descripcion: clearable_text(&self.descripcion, editing),
            items: self
                .items
                .iter()
                .filter(|i| !i.linea.is_blank())
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Propuesta {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "paciente": { "id": 1, "nombre": "Ana", "apellido": "Rojas" },
            "items": [
                { "opcion": "B", "tratamiento": "Implante", "cantidad": 1, "precioUnitario": 5000 },
                { "opcion": "A", "tratamiento": "Puente", "cantidad": 1, "precioUnitario": 3000 },
                { "opcion": "A", "tratamiento": "Extracción", "cantidad": 1, "precioUnitario": 200 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_options_sorted_and_totals() {
        let p = sample();
        assert_eq!(p.options(), vec![Variante::A, Variante::B]);
        assert_eq!(p.total_for(Variante::A), 3200.0);
        assert_eq!(p.total_for(Variante::C), 0.0);
        assert_eq!(p.range_label(), "3.200,00 - 5.000,00");
        assert!(p.can_delete());
    }

    #[test]
    fn test_item_flattened_on_wire() {
        let item = PropuestaItem::new(Variante::C, TreatmentLine::new("Carilla", 2.0, 900.0));
        let body = serde_json::to_value(&item).unwrap();
        assert_eq!(body["opcion"], "C");
        assert_eq!(body["precioUnitario"], 900.0);
        assert!(body.get("linea").is_none());
    }

    #[test]
    fn test_next_option() {
        let mut form = PropuestaForm::from_entity(&sample());
        assert_eq!(form.next_option(), Some(Variante::C));
        for v in Variante::ALL {
            form.add_item(v);
        }
        assert_eq!(form.next_option(), None);
    }
}
