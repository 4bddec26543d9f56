use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub password: String,
}

/// Роль пользователя консоли
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rol {
    Administrador,
    Doctor,
    #[default]
    Recepcionista,
}

impl Rol {
    pub const ALL: [Rol; 3] = [Rol::Administrador, Rol::Doctor, Rol::Recepcionista];

    pub fn label(&self) -> &'static str {
        match self {
            Rol::Administrador => "Administrador",
            Rol::Doctor => "Doctor",
            Rol::Recepcionista => "Recepcionista",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Rol::Administrador => "administrador",
            Rol::Doctor => "doctor",
            Rol::Recepcionista => "recepcionista",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .unwrap_or_default()
    }
}

/// Пользователь текущей сессии; хранится в localStorage под ключом `user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub usuario: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub rol: Rol,
    #[serde(default)]
    pub token: String,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        self.nombre
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.usuario.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.rol == Rol::Administrador
    }
}

/// Ответ `/auth/login`: токен может прийти отдельно или внутри `user`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: SessionUser,
}

impl LoginResponse {
    pub fn into_session(self) -> SessionUser {
        let mut user = self.user;
        if let Some(token) = self.token.filter(|t| !t.is_empty()) {
            user.token = token;
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_token_merged() {
        let resp: LoginResponse = serde_json::from_value(serde_json::json!({
            "token": "abc",
            "user": { "id": 1, "usuario": "admin", "rol": "administrador" }
        }))
        .unwrap();
        let session = resp.into_session();
        assert_eq!(session.token, "abc");
        assert!(session.is_admin());
        assert_eq!(session.display_name(), "admin");
    }
}
