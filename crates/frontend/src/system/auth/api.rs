use contracts::system::auth::{LoginRequest, LoginResponse, SessionUser};

use crate::shared::api_utils::post_json;

/// Login with username and password
pub async fn login(usuario: String, password: String) -> Result<SessionUser, String> {
    let request = LoginRequest { usuario, password };
    let value = post_json("/auth/login", &request).await?;
    serde_json::from_value::<LoginResponse>(value)
        .map(LoginResponse::into_session)
        .map_err(|e| {
            log::error!("/auth/login: unexpected response: {}", e);
            "Respuesta de inicio de sesión inválida".to_string()
        })
}
