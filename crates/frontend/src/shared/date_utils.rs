//! Текущая дата браузера.
//!
//! Форматирование дат для таблиц и документов лежит в
//! `contracts::shared::date_format`; здесь только то, что требует `js_sys`.

use chrono::NaiveDate;

/// Сегодня по локальным часам браузера
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Сегодня в формате `<input type="date">`
pub fn today_iso() -> String {
    iso(today())
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "15/03/2024 14:05" для подписей отчётов
pub fn now_label() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:02}/{:02}/{} {:02}:{:02}",
        now.get_date(),
        now.get_month() + 1,
        now.get_full_year(),
        now.get_hours(),
        now.get_minutes()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(iso(date), "2024-03-05");
    }
}
