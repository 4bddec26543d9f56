use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// Строка запроса, в которой живёт активная вкладка: `?active=a001_patient`
#[derive(Debug, Default, Serialize, Deserialize)]
struct TabQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,
}

/// Ключ вкладки из `location.search`
pub fn active_from_query(search: &str) -> Option<String> {
    serde_qs::from_str::<TabQuery>(search.trim_start_matches('?'))
        .ok()
        .and_then(|q| q.active)
        .filter(|key| !key.is_empty())
}

/// `?active=<key>` для `history.replaceState`
pub fn active_query(key: &str) -> String {
    let query = TabQuery {
        active: Some(key.to_string()),
    };
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn use_global() -> Self {
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
    }

    /// Открывает вкладку из URL и дальше держит `?active=` в синхроне
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_query(&search) {
            let title = tab_label_for_key(&key);
            if title.is_empty() {
                log::warn!("unknown tab in url: {}", key);
            } else {
                self.open_tab(&key, title);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&key);
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: {}", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: {}", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next);
        }
    }

    /// При выходе: следующий пользователь начинает с пустого набора вкладок
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=a009_proforma"),
            Some("a009_proforma".to_string())
        );
        assert_eq!(active_from_query("active=sys_users&x=1"), Some("sys_users".to_string()));
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
    }

    #[test]
    fn test_active_query() {
        assert_eq!(active_query("d400_statistics"), "?active=d400_statistics");
        assert_eq!(
            active_from_query(&active_query("a001_patient")),
            Some("a001_patient".to_string())
        );
    }
}
