use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{NotificationService, ToastHost};
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    provide_context(SessionContext::new());
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(NotificationService::new());

    view! {
        <AppShell />
        <ModalHost />
        <ToastHost />
    }
}
