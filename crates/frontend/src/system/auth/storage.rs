//! Сессия в localStorage: пользователь целиком, JSON под ключом `user`.

use contracts::system::auth::SessionUser;
use web_sys::window;

const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the logged-in user (with token) to localStorage
pub fn save_user(user: &SessionUser) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => log::error!("failed to serialize session: {}", e),
    }
}

/// Get the stored user; a broken record is treated as no session
pub fn load_user() -> Option<SessionUser> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    parse_user(&raw)
}

fn parse_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("stored session is unreadable: {}", e);
            None
        }
    }
}

/// Bearer token for API calls
pub fn token() -> Option<String> {
    load_user().map(|u| u.token).filter(|t| !t.is_empty())
}

pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Rol;

    #[test]
    fn test_parse_stored_user() {
        let user = parse_user(r#"{"id":4,"usuario":"recep","rol":"recepcionista","token":"t0k"}"#).unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.rol, Rol::Recepcionista);
        assert_eq!(user.token, "t0k");
        assert!(parse_user("not json").is_none());
    }
}
