//! Верхняя панель: меню, название клиники, пользователь и выход.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::clinic::CLINIC_NAME;
use crate::shared::icons::icon;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = AppGlobalContext::use_global();
    let session = SessionContext::use_session();

    let logout = move |_| {
        log::info!("logout");
        ctx.close_all();
        session.logout();
    };

    let user_name = move || {
        session
            .current_user()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };
    let user_role = move || {
        session
            .current_user()
            .map(|u| u.rol.label())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    title=move || if ctx.left_open.get() { "Ocultar menú" } else { "Mostrar menú" }
                    on:click=move |_| ctx.toggle_left()
                >
                    {icon("menu")}
                </button>
                {icon("tooth")}
                <span class="top-header__title">{CLINIC_NAME}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                    <span class="top-header__role">{user_role}</span>
                </div>
                <button class="top-header__icon-btn" title="Cerrar sesión" on:click=logout>
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
