//! API utilities for frontend-backend communication
//!
//! Every helper returns `Result<T, String>` where the error is already the
//! text shown to the user; the raw cause goes to the console log.

use crate::system::auth::storage;
use contracts::domain::common::{EstadoPatch, ListPage, ListQuery, Resource};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Текст, когда бэкенд не объяснил ошибку
pub const GENERIC_ERROR: &str = "Ocurrió un error inesperado. Intente nuevamente.";
/// Текст, когда запрос не дошёл до бэкенда
pub const NETWORK_ERROR: &str = "No se pudo conectar con el servidor";

/// Get the base URL for API requests
///
/// `CURARE_API_URL` at build time wins; otherwise the backend is expected
/// on port 3000 of the host that served the console, under `/api`.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/pacientes/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(url) = option_env!("CURARE_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

/// Build a full API URL from a resource path such as `/pacientes/3`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Вытаскивает сообщение из тела ответа с ошибкой.
///
/// Понимает `{"message": "..."}`, `{"message": ["a", "b"]}` и
/// `{"error": "..."}`; всё остальное превращается в общий текст.
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("message") {
            Some(Value::String(msg)) if !msg.trim().is_empty() => return msg.clone(),
            Some(Value::Array(items)) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                if !parts.is_empty() {
                    return parts.join(". ");
                }
            }
            _ => {}
        }
        if let Some(Value::String(msg)) = value.get("error") {
            if !msg.trim().is_empty() {
                return msg.clone();
            }
        }
    }
    if body.trim().is_empty() && !(200..300).contains(&status) {
        return format!("{} (HTTP {})", GENERIC_ERROR, status);
    }
    GENERIC_ERROR.to_string()
}

async fn send(builder: RequestBuilder, path: &str) -> Result<Response, String> {
    let response = with_auth(builder)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            log::error!("{}: request failed: {}", path, e);
            NETWORK_ERROR.to_string()
        })?;
    check(response, path).await
}

async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    path: &str,
    body: &B,
) -> Result<Response, String> {
    let response = with_auth(builder)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| {
            log::error!("{}: failed to serialize body: {}", path, e);
            GENERIC_ERROR.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("{}: request failed: {}", path, e);
            NETWORK_ERROR.to_string()
        })?;
    check(response, path).await
}

async fn check(response: Response, path: &str) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = extract_error_message(status, &body);
    log::error!("{}: HTTP {}: {}", path, status, message);
    Err(message)
}

/// Тело ответа как JSON; пустое тело даёт `Value::Null`
async fn read_value(response: Response, path: &str) -> Result<Value, String> {
    let text = response.text().await.map_err(|e| {
        log::error!("{}: failed to read body: {}", path, e);
        GENERIC_ERROR.to_string()
    })?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| {
        log::error!("{}: invalid JSON: {}", path, e);
        GENERIC_ERROR.to_string()
    })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(Request::get(&api_url(path)), path).await?;
    response.json::<T>().await.map_err(|e| {
        log::error!("{}: failed to parse response: {}", path, e);
        GENERIC_ERROR.to_string()
    })
}

/// `?page=..&limit=..&search=..` для запроса списка
pub fn list_query_string(query: &ListQuery) -> String {
    serde_qs::to_string(query).unwrap_or_default()
}

/// Одна страница коллекции `E::PATH`
pub async fn fetch_page<E: Resource + DeserializeOwned>(
    query: &ListQuery,
) -> Result<ListPage<E>, String> {
    let path = format!("{}?{}", E::PATH, list_query_string(query));
    log::debug!("GET {}", path);
    let response = send(Request::get(&api_url(&path)), &path).await?;
    let value = read_value(response, &path).await?;
    Ok(ListPage::from_value(value, query.limit))
}

/// Все строки под текущий поиск, для печати и экспорта
pub async fn fetch_all<E: Resource + DeserializeOwned>(search: &str) -> Result<Vec<E>, String> {
    fetch_page::<E>(&ListQuery::all(search))
        .await
        .map(|page| page.data)
}

pub async fn fetch_by_id<E: Resource + DeserializeOwned>(id: i64) -> Result<E, String> {
    get_json::<E>(&format!("{}/{}", E::PATH, id)).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Value, String> {
    let response = send_json(Request::post(&api_url(path)), path, body).await?;
    read_value(response, path).await
}

pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<Value, String> {
    let response = send_json(Request::patch(&api_url(path)), path, body).await?;
    read_value(response, path).await
}

/// Создание (`POST E::PATH`) или правка (`PATCH E::PATH/id`)
pub async fn save<E: Resource, B: Serialize>(id: Option<i64>, body: &B) -> Result<Value, String> {
    match id {
        Some(id) => patch_json(&format!("{}/{}", E::PATH, id), body).await,
        None => post_json(E::PATH, body).await,
    }
}

/// Мягкое удаление и реактивация: только PATCH поля `estado`
pub async fn set_estado<E: Resource>(id: i64, patch: EstadoPatch) -> Result<(), String> {
    patch_json(&format!("{}/{}", E::PATH, id), &patch)
        .await
        .map(|_| ())
}

/// Настоящий DELETE, только для ресурсов без `estado`
pub async fn delete_by_id<E: Resource>(id: i64) -> Result<(), String> {
    let path = format!("{}/{}", E::PATH, id);
    send(Request::delete(&api_url(&path)), &path).await.map(|_| ())
}

/// Файл с авторизацией (скачивание бэкапа): `<a href>` не передал бы токен
pub async fn get_blob(path: &str) -> Result<web_sys::Blob, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| {
            log::error!("{}: request failed: {}", path, e);
            NETWORK_ERROR.to_string()
        })?;
    let bytes = check(response, path).await?.binary().await.map_err(|e| {
        log::error!("{}: failed to read body: {}", path, e);
        GENERIC_ERROR.to_string()
    })?;
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
    web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|e| {
        log::error!("{}: failed to build blob: {:?}", path, e);
        GENERIC_ERROR.to_string()
    })
}

/// POST multipart-формы (PDF для WhatsApp); важен только 2xx
pub async fn post_multipart(path: &str, form: web_sys::FormData) -> Result<(), String> {
    let request = with_auth(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| {
            log::error!("{}: failed to build multipart body: {}", path, e);
            GENERIC_ERROR.to_string()
        })?;
    let response = request.send().await.map_err(|e| {
        log::error!("{}: request failed: {}", path, e);
        NETWORK_ERROR.to_string()
    })?;
    check(response, path).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_string() {
        let body = r#"{"statusCode":409,"message":"El CI ya está registrado"}"#;
        assert_eq!(extract_error_message(409, body), "El CI ya está registrado");
    }

    #[test]
    fn test_message_array() {
        let body = r#"{"message":["nombre is required","ci must be a string"]}"#;
        assert_eq!(
            extract_error_message(400, body),
            "nombre is required. ci must be a string"
        );
    }

    #[test]
    fn test_error_field_and_fallbacks() {
        assert_eq!(extract_error_message(401, r#"{"error":"Unauthorized"}"#), "Unauthorized");
        assert_eq!(extract_error_message(500, "<html>oops</html>"), GENERIC_ERROR);
        assert_eq!(
            extract_error_message(502, ""),
            format!("{} (HTTP 502)", GENERIC_ERROR)
        );
    }

    #[test]
    fn test_list_query_string() {
        assert_eq!(
            list_query_string(&ListQuery::new(2, 10, " ana ")),
            "page=2&limit=10&search=ana"
        );
        assert_eq!(list_query_string(&ListQuery::new(1, 5, "")), "page=1&limit=5");
    }
}
