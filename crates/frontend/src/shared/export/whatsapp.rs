//! Отправка PDF пациенту через WhatsApp.
//!
//! Сам PDF уходит бэкенду (`POST /whatsapp/enviar-pdf`, multipart),
//! а если сервер не справился, ссылка `wa.me` открывает чат с готовым текстом.

use crate::shared::api_utils;
use contracts::shared::phone::whatsapp_number;
use web_sys::{Blob, FormData};

const SEND_PDF_PATH: &str = "/whatsapp/enviar-pdf";

pub async fn send_pdf(blob: &Blob, filename: &str, phone: &str, message: &str) -> Result<(), String> {
    let number = whatsapp_number(phone);
    if number.is_empty() {
        return Err("El paciente no tiene un número de teléfono registrado".to_string());
    }

    let form = FormData::new().map_err(|e| format!("FormData: {:?}", e))?;
    form.append_with_blob_and_filename("file", blob, filename)
        .map_err(|e| format!("FormData: {:?}", e))?;
    form.append_with_str("telefono", &number)
        .map_err(|e| format!("FormData: {:?}", e))?;
    form.append_with_str("mensaje", message)
        .map_err(|e| format!("FormData: {:?}", e))?;

    api_utils::post_multipart(SEND_PDF_PATH, form).await
}

/// Есть ли номер, на который можно открыть чат
pub fn can_open_chat(phone: &str) -> bool {
    !whatsapp_number(phone).is_empty()
}

pub fn chat_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        whatsapp_number(phone),
        urlencoding::encode(message)
    )
}

pub fn open_chat(phone: &str, message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&chat_link(phone, message), "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_link() {
        assert_eq!(
            chat_link("+591 7123-4567", "Hola Luis, su presupuesto"),
            "https://wa.me/59171234567?text=Hola%20Luis%2C%20su%20presupuesto"
        );
    }

    #[test]
    fn test_can_open_chat() {
        assert!(can_open_chat("+59171234567"));
        assert!(!can_open_chat(""));
        assert!(!can_open_chat("  "));
    }
}
