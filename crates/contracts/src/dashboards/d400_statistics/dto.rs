use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Period filter for the statistics dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstadisticasQuery {
    /// Start date in format "YYYY-MM-DD"
    pub desde: String,
    /// End date in format "YYYY-MM-DD"
    pub hasta: String,
}

impl EstadisticasQuery {
    /// From the first day of the month of `today` up to `today`
    pub fn current_month(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        Self {
            desde: first.format("%Y-%m-%d").to_string(),
            hasta: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// January 1st of the year of `today` up to `today`
    pub fn current_year(today: NaiveDate) -> Self {
        let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self {
            desde: first.format("%Y-%m-%d").to_string(),
            hasta: today.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.desde.is_empty() && !self.hasta.is_empty() && self.desde <= self.hasta
    }
}

/// Response of `/estadisticas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Estadisticas {
    #[serde(default)]
    pub ingresos_totales: f64,
    #[serde(default)]
    pub pacientes_nuevos: u32,
    #[serde(default)]
    pub cantidad_pagos: u32,
    #[serde(default)]
    pub presupuestos_activos: u32,
    #[serde(default)]
    pub ingresos_por_mes: Vec<MesIngreso>,
    #[serde(default)]
    pub tratamientos_top: Vec<TratamientoTop>,
}

impl Estadisticas {
    /// Max monthly income, used to scale the bars
    pub fn max_month(&self) -> f64 {
        self.ingresos_por_mes
            .iter()
            .map(|m| m.total)
            .fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MesIngreso {
    /// Month in format "YYYY-MM"
    pub mes: String,
    pub total: f64,
}

impl MesIngreso {
    /// "2024-03" -> "mar 2024"
    pub fn label(&self) -> String {
        let mut parts = self.mes.splitn(2, '-');
        let year = parts.next().unwrap_or_default();
        let month = parts
            .next()
            .and_then(|m| m.parse::<usize>().ok())
            .filter(|m| (1..=12).contains(m));
        match month {
            Some(m) => format!("{} {}", MONTHS_SHORT[m - 1], year),
            None => self.mes.clone(),
        }
    }

    /// Bar width in percent relative to `max`
    pub fn percent_of(&self, max: f64) -> f64 {
        if max <= 0.0 {
            0.0
        } else {
            (self.total / max * 100.0).clamp(0.0, 100.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TratamientoTop {
    pub tratamiento: String,
    pub cantidad: u32,
    #[serde(default)]
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_month() {
        let q = EstadisticasQuery::current_month(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(q.desde, "2024-03-01");
        assert_eq!(q.hasta, "2024-03-15");
        assert!(q.is_valid());
    }

    #[test]
    fn test_month_label_and_scale() {
        let m = MesIngreso {
            mes: "2024-03".into(),
            total: 500.0,
        };
        assert_eq!(m.label(), "mar 2024");
        assert_eq!(m.percent_of(1000.0), 50.0);
        assert_eq!(m.percent_of(0.0), 0.0);
    }
}
