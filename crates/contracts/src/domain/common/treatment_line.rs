use crate::shared::money::{format_money, line_total, sum_totals};
use serde::{Deserialize, Serialize};

/// Строка лечения в проформе или предложении
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub tratamiento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pieza: Option<String>,
    #[serde(default = "one")]
    pub cantidad: f64,
    #[serde(default)]
    pub precio_unitario: f64,
    /// Скидка в процентах
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descuento: Option<f64>,
}

fn one() -> f64 {
    1.0
}

impl TreatmentLine {
    pub fn new(tratamiento: &str, cantidad: f64, precio_unitario: f64) -> Self {
        Self {
            tratamiento: tratamiento.to_string(),
            cantidad,
            precio_unitario,
            ..Default::default()
        }
    }

    pub fn with_discount(mut self, percent: f64) -> Self {
        self.descuento = Some(percent);
        self
    }

    pub fn total(&self) -> f64 {
        line_total(self.cantidad, self.precio_unitario, self.descuento)
    }

    pub fn has_discount(&self) -> bool {
        self.descuento.is_some_and(|d| d > 0.0)
    }

    pub fn is_blank(&self) -> bool {
        self.tratamiento.trim().is_empty()
    }

    pub fn pieza_label(&self) -> String {
        self.pieza.clone().unwrap_or_else(|| "-".to_string())
    }

    /// Ячейки строки документа; скидочные колонки только при `with_discount`
    pub fn cells(&self, with_discount: bool) -> Vec<String> {
        let mut cells = vec![
            self.tratamiento.clone(),
            self.pieza_label(),
            format!("{}", self.cantidad),
            format_money(self.precio_unitario),
        ];
        if with_discount {
            let percent = self.descuento.unwrap_or(0.0);
            let gross = self.cantidad * self.precio_unitario;
            cells.push(format!("{}%", percent));
            cells.push(format_money(gross - self.total()));
        }
        cells.push(format_money(self.total()));
        cells
    }
}

/// Итог документа по уже загруженным строкам
pub fn lines_total(lines: &[TreatmentLine]) -> f64 {
    sum_totals(lines.iter().map(TreatmentLine::total))
}

pub fn any_discount(lines: &[TreatmentLine]) -> bool {
    lines.iter().any(TreatmentLine::has_discount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_total() {
        let lines = vec![
            TreatmentLine::new("Profilaxis", 1.0, 150.0),
            TreatmentLine::new("Resina", 3.0, 210.33),
            TreatmentLine::new("Corona", 1.0, 1200.0).with_discount(10.0),
        ];
        assert_eq!(format_money(lines_total(&lines)), "1.860,99");
        assert!(any_discount(&lines));
    }

    #[test]
    fn test_cells_with_discount() {
        let line = TreatmentLine::new("Corona", 1.0, 1200.0).with_discount(10.0);
        assert_eq!(
            line.cells(true),
            vec!["Corona", "-", "1", "1.200,00", "10%", "120,00", "1.080,00"]
        );
        assert_eq!(line.cells(false).len(), 5);
    }

    #[test]
    fn test_default_quantity_on_parse() {
        let line: TreatmentLine =
            serde_json::from_value(serde_json::json!({ "tratamiento": "Endodoncia", "precioUnitario": 800 }))
                .unwrap();
        assert_eq!(line.cantidad, 1.0);
        assert_eq!(line.total(), 800.0);
    }
}
