//! Схема колонок табличного отчёта.
//!
//! Один и тот же набор колонок и строк уходит в печать (HTML), в Excel и
//! в PDF, поэтому сущность описывает отчёт один раз через `ReportRow`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl ColumnAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            ColumnAlign::Left => "left",
            ColumnAlign::Center => "center",
            ColumnAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportColumn {
    pub header: &'static str,
    pub align: ColumnAlign,
    /// Относительная ширина колонки в PDF (0 = авто)
    pub weight: f64,
}

impl ReportColumn {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            align: ColumnAlign::Left,
            weight: 0.0,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            align: ColumnAlign::Right,
            weight: 0.0,
        }
    }

    pub const fn center(header: &'static str) -> Self {
        Self {
            header,
            align: ColumnAlign::Center,
            weight: 0.0,
        }
    }

    pub const fn weighted(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}

/// Строка, которую можно выгрузить в отчёт
pub trait ReportRow {
    fn report_columns() -> Vec<ReportColumn>;

    /// Значения ячеек в порядке `report_columns()`
    fn report_cells(&self) -> Vec<String>;
}

/// Матрица ячеек для набора строк
pub fn report_matrix<R: ReportRow>(rows: &[R]) -> Vec<Vec<String>> {
    rows.iter().map(ReportRow::report_cells).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, f64);

    impl ReportRow for Item {
        fn report_columns() -> Vec<ReportColumn> {
            vec![ReportColumn::new("Nombre"), ReportColumn::right("Monto")]
        }

        fn report_cells(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn test_matrix_follows_columns() {
        let rows = vec![Item("A", 1.0), Item("B", 2.5)];
        let matrix = report_matrix(&rows);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[1], vec!["B".to_string(), "2.50".to_string()]);
        assert_eq!(Item::report_columns()[1].align, ColumnAlign::Right);
    }
}
