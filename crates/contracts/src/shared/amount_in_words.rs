//! Сумма прописью на испанском для проформ и предложений.

const UNITS: [&str; 30] = [
    "cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez",
    "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho",
    "diecinueve", "veinte", "veintiuno", "veintidós", "veintitrés", "veinticuatro",
    "veinticinco", "veintiséis", "veintisiete", "veintiocho", "veintinueve",
];

const TENS: [&str; 10] = [
    "", "", "", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ciento",
    "doscientos",
    "trescientos",
    "cuatrocientos",
    "quinientos",
    "seiscientos",
    "setecientos",
    "ochocientos",
    "novecientos",
];

/// Moneda, которой подписывается сумма в документах клиники
pub const CURRENCY_WORD: &str = "BOLIVIANOS";

/// 1..=999. `apocope` — перед `mil`/`millones`: `uno` → `un`, `veintiuno` → `veintiún`.
fn below_thousand(n: u64, apocope: bool) -> String {
    debug_assert!(n > 0 && n < 1000);
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    let mut parts: Vec<String> = Vec::new();
    if hundreds > 0 {
        if hundreds == 1 && rest == 0 {
            parts.push("cien".to_string());
        } else {
            parts.push(HUNDREDS[hundreds].to_string());
        }
    }

    if rest > 0 {
        let tail = if rest < 30 {
            UNITS[rest].to_string()
        } else if rest % 10 == 0 {
            TENS[rest / 10].to_string()
        } else {
            format!("{} y {}", TENS[rest / 10], UNITS[rest % 10])
        };
        parts.push(if apocope { apocopate(&tail) } else { tail });
    }

    parts.join(" ")
}

fn apocopate(words: &str) -> String {
    if let Some(head) = words.strip_suffix("veintiuno") {
        format!("{}veintiún", head)
    } else if let Some(head) = words.strip_suffix("uno") {
        format!("{}un", head)
    } else {
        words.to_string()
    }
}

fn to_words(n: u64, apocope: bool) -> String {
    if n == 0 {
        return UNITS[0].to_string();
    }

    let millions = n / 1_000_000;
    let thousands = (n % 1_000_000) / 1000;
    let below = n % 1000;

    let mut parts: Vec<String> = Vec::new();
    if millions > 0 {
        if millions == 1 {
            parts.push("un millón".to_string());
        } else {
            parts.push(format!("{} millones", to_words(millions, true)));
        }
    }
    if thousands > 0 {
        if thousands == 1 {
            parts.push("mil".to_string());
        } else {
            parts.push(format!("{} mil", below_thousand(thousands, true)));
        }
    }
    if below > 0 {
        parts.push(below_thousand(below, apocope));
    }

    parts.join(" ")
}

/// Целое число испанскими словами в нижнем регистре
pub fn number_to_words(n: u64) -> String {
    to_words(n, false)
}

/// Сумма для документов: `MIL DOSCIENTOS TREINTA Y CUATRO 56/100 BOLIVIANOS`
pub fn amount_in_words(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let decimals = cents % 100;
    format!(
        "{} {:02}/100 {}",
        number_to_words(integer).to_uppercase(),
        decimals,
        CURRENCY_WORD
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(number_to_words(0), "cero");
        assert_eq!(number_to_words(1), "uno");
        assert_eq!(number_to_words(16), "dieciséis");
        assert_eq!(number_to_words(21), "veintiuno");
        assert_eq!(number_to_words(30), "treinta");
        assert_eq!(number_to_words(45), "cuarenta y cinco");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(number_to_words(100), "cien");
        assert_eq!(number_to_words(101), "ciento uno");
        assert_eq!(number_to_words(500), "quinientos");
        assert_eq!(number_to_words(999), "novecientos noventa y nueve");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(number_to_words(1000), "mil");
        assert_eq!(number_to_words(1234), "mil doscientos treinta y cuatro");
        assert_eq!(number_to_words(2001), "dos mil uno");
        assert_eq!(number_to_words(21000), "veintiún mil");
        assert_eq!(number_to_words(31000), "treinta y un mil");
        assert_eq!(number_to_words(100000), "cien mil");
    }

    #[test]
    fn test_millions() {
        assert_eq!(number_to_words(1_000_000), "un millón");
        assert_eq!(number_to_words(2_500_000), "dos millones quinientos mil");
        assert_eq!(number_to_words(21_000_001), "veintiún millones uno");
    }

    #[test]
    fn test_amount_in_words() {
        assert_eq!(
            amount_in_words(1234.56),
            "MIL DOSCIENTOS TREINTA Y CUATRO 56/100 BOLIVIANOS"
        );
        assert_eq!(amount_in_words(100.0), "CIEN 00/100 BOLIVIANOS");
        assert_eq!(amount_in_words(0.5), "CERO 50/100 BOLIVIANOS");
    }
}
