//! Телефон хранится одной строкой `+59112345678`; форма показывает код
//! страны и локальный номер раздельно.

/// Коды стран в селекте формы
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+591", "Bolivia"),
    ("+54", "Argentina"),
    ("+55", "Brasil"),
    ("+56", "Chile"),
    ("+57", "Colombia"),
    ("+593", "Ecuador"),
    ("+595", "Paraguay"),
    ("+51", "Perú"),
    ("+598", "Uruguay"),
    ("+58", "Venezuela"),
    ("+52", "México"),
    ("+34", "España"),
    ("+1", "EE.UU."),
];

pub const DEFAULT_COUNTRY_CODE: &str = "+591";

/// Делит сохранённый номер на код страны и локальную часть.
///
/// Код ищется по самому длинному совпадающему префиксу; номер без
/// известного кода целиком считается локальным с кодом по умолчанию.
pub fn split_phone(phone: &str) -> (String, String) {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return (DEFAULT_COUNTRY_CODE.to_string(), String::new());
    }

    let best = COUNTRY_CODES
        .iter()
        .map(|(code, _)| *code)
        .filter(|code| compact.starts_with(code))
        .max_by_key(|code| code.len());

    match best {
        Some(code) => (code.to_string(), compact[code.len()..].to_string()),
        None => (
            DEFAULT_COUNTRY_CODE.to_string(),
            compact.trim_start_matches('+').to_string(),
        ),
    }
}

/// Склеивает код и номер перед отправкой; пустой номер даёт пустую строку
pub fn join_phone(code: &str, local: &str) -> String {
    let digits: String = local.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        String::new()
    } else {
        format!("{}{}", code.trim(), digits)
    }
}

/// Номер для WhatsApp-ссылки: только цифры
pub fn whatsapp_number(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_bolivia() {
        assert_eq!(
            split_phone("+59112345678"),
            ("+591".to_string(), "12345678".to_string())
        );
    }

    #[test]
    fn test_split_prefers_longest_code() {
        // +595 и +59 не должны спутаться с +591
        assert_eq!(
            split_phone("+595981123456"),
            ("+595".to_string(), "981123456".to_string())
        );
        assert_eq!(
            split_phone("+14155550100"),
            ("+1".to_string(), "4155550100".to_string())
        );
    }

    #[test]
    fn test_split_without_code() {
        assert_eq!(
            split_phone("71234567"),
            ("+591".to_string(), "71234567".to_string())
        );
        assert_eq!(split_phone(""), ("+591".to_string(), String::new()));
    }

    #[test]
    fn test_join() {
        assert_eq!(join_phone("+591", "123 456 78"), "+59112345678");
        assert_eq!(join_phone("+591", ""), "");
        let (code, local) = split_phone("+56912345678");
        assert_eq!(join_phone(&code, &local), "+56912345678");
    }

    #[test]
    fn test_whatsapp_number() {
        assert_eq!(whatsapp_number("+591 7123-4567"), "59171234567");
    }
}
