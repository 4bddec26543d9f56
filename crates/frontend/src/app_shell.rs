//! Корневые компоненты приложения
//!
//! - `AppShell` - вход (LoginPage или MainLayout)
//! - `MainLayout` - меню и вкладки

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::SessionContext;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Синхронизация вкладок с `?active=` запускается один раз при создании.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = AppGlobalContext::use_global();
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let session = SessionContext::use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
