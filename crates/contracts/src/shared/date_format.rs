/// Utilities for date formatting in Spanish locale (dd/mm/yyyy)
///
/// The backend sends ISO strings; tables and documents show them day-first.
use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time: String = time_part.chars().take(5).collect();
        return format!("{} {}", format_date(date_part), time);
    }
    format_date(datetime_str)
}

/// Value for `<input type="date">`: the `YYYY-MM-DD` prefix
pub fn input_date(date_str: &str) -> String {
    date_str.chars().take(10).collect()
}

/// "15 de marzo de 2024" for document headers
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Long date from an ISO string, falls back to the raw text
pub fn long_date_str(date_str: &str) -> String {
    NaiveDate::parse_from_str(&input_date(date_str), "%Y-%m-%d")
        .map(long_date)
        .unwrap_or_else(|_| date_str.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(long_date_str("2024-03-15T00:00:00Z"), "15 de marzo de 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(long_date_str("invalid"), "invalid");
    }
}
