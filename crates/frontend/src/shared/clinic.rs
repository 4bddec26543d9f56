//! Реквизиты клиники для шапок документов, печати и PDF.

pub const CLINIC_NAME: &str = "Curare Centro Dental";
pub const CLINIC_SLOGAN: &str = "Odontología integral";
pub const CLINIC_ADDRESS: &str = "Av. Ballivián N° 1250, Cochabamba - Bolivia";
pub const CLINIC_PHONE: &str = "+591 4 4251234";
pub const CLINIC_EMAIL: &str = "contacto@curare.bo";

/// Логотип из `assets/`, копируется Trunk'ом как есть
pub const LOGO_PATH: &str = "/assets/logo.svg";

/// Тишина в поле поиска перед запросом, мс
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Сколько ждать логотип в окне печати, мс
pub const PRINT_LOGO_TIMEOUT_MS: u32 = 3000;
/// Через сколько убрать iframe после `print()`, мс
pub const PRINT_CLEANUP_DELAY_MS: u32 = 1000;

/// Время жизни всплывающего уведомления, мс
pub const TOAST_TTL_MS: u32 = 3500;

/// Строка контактов для подвала документов
pub fn contact_line() -> String {
    format!("{} · Tel. {} · {}", CLINIC_ADDRESS, CLINIC_PHONE, CLINIC_EMAIL)
}
