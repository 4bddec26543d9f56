//! Текущая сессия, доступная всему приложению через контекст.

use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    /// Восстанавливает сессию из localStorage
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(storage::load_user()),
        }
    }

    /// Hook to access session state
    pub fn use_session() -> Self {
        use_context::<SessionContext>().expect("SessionContext not found in component tree")
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    /// Id автора для записей, которые его хранят (платежи)
    pub fn current_user_id(&self) -> Option<i64> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.id))
    }

    pub fn token(&self) -> Option<String> {
        self.user
            .with_untracked(|u| u.as_ref().map(|u| u.token.clone()))
            .filter(|t| !t.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.user.with(|u| u.as_ref().is_some_and(SessionUser::is_admin))
    }

    pub async fn login(&self, usuario: String, password: String) -> Result<(), String> {
        let user = api::login(usuario, password).await?;
        log::info!("session started for {}", user.usuario);
        storage::save_user(&user);
        self.user.set(Some(user));
        Ok(())
    }

    /// Без запроса к бэкенду: токен просто забывается
    pub fn logout(&self) {
        storage::clear_user();
        self.user.set(None);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
