//! Денежные суммы на экранах и в документах (боливиано, `1.234,56`).

pub const CURRENCY_SYMBOL: &str = "Bs.";

/// Округление до сотых, как в итогах документов
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Итог строки: количество × цена минус скидка в процентах
pub fn line_total(quantity: f64, unit_price: f64, discount_percent: Option<f64>) -> f64 {
    let gross = quantity * unit_price;
    let discount = discount_percent.unwrap_or(0.0).clamp(0.0, 100.0);
    round2(gross * (1.0 - discount / 100.0))
}

/// Сумма итогов строк, округлённая до сотых
pub fn sum_totals<I: IntoIterator<Item = f64>>(totals: I) -> f64 {
    round2(totals.into_iter().sum())
}

/// `1234.56` → `1.234,56`
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let int_part = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}{},{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// `Bs. 1.234,56`
pub fn format_bs(value: f64) -> String {
    format!("{} {}", CURRENCY_SYMBOL, format_money(value))
}

/// Количество без лишних нулей и с запятой: `2.5` → `2,5`, `10.0` → `10`
pub fn format_quantity(value: f64) -> String {
    let text = format!("{}", round2(value));
    text.replace('.', ",")
}

/// Обратное к `format_money`/`format_bs`/`format_quantity`.
/// Точка допустима только как разделитель тысяч (`1.234`), иначе `None`.
pub fn parse_money(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_prefix(CURRENCY_SYMBOL).unwrap_or(text).trim();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac) = match text.split_once(',') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (text, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let groups: Vec<&str> = int_part.split('.').collect();
    let grouped_ok = match groups.split_first() {
        Some((first, rest)) => {
            all_digits(first)
                && (rest.is_empty() || first.len() <= 3)
                && rest.iter().all(|g| g.len() == 3 && all_digits(g))
        }
        None => false,
    };
    if !grouped_ok || frac.is_some_and(|f| !all_digits(f)) {
        return None;
    }

    let mut plain = groups.concat();
    if let Some(frac) = frac {
        plain.push('.');
        plain.push_str(frac);
    }
    let value: f64 = plain.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1.234,56");
        assert_eq!(format_money(1234567.8), "1.234.567,80");
        assert_eq!(format_money(0.0), "0,00");
        assert_eq!(format_money(-50.5), "-50,50");
        assert_eq!(format_bs(100.0), "Bs. 100,00");
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(2.0, 150.0, None), 300.0);
        assert_eq!(line_total(1.0, 200.0, Some(10.0)), 180.0);
        assert_eq!(line_total(3.0, 33.333, None), 100.0);
    }

    #[test]
    fn test_sum_totals() {
        assert_eq!(sum_totals(vec![0.1, 0.2]), 0.3);
        assert_eq!(sum_totals(vec![100.25, 200.5, 33.33]), 334.08);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(2.5), "2,5");
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(0.125), "0,13");
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("1.234,56"), Some(1234.56));
        assert_eq!(parse_money("Bs. 20,00"), Some(20.0));
        assert_eq!(parse_money("-50,50"), Some(-50.5));
        assert_eq!(parse_money("2,5"), Some(2.5));
        assert_eq!(parse_money("12"), Some(12.0));
        assert_eq!(parse_money(&format_money(1234567.8)), Some(1234567.8));
        // точка как десятичный разделитель не угадывается
        assert_eq!(parse_money("2.5"), None);
        assert_eq!(parse_money("1.2345"), None);
        assert_eq!(parse_money("-"), None);
        assert_eq!(parse_money(""), None);
    }
}
