use leptos::prelude::*;

use super::context::SessionContext;

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::use_session();

    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| view! {
                <div class="placeholder">"Acceso restringido a administradores."</div>
            }
        >
            {children()}
        </Show>
    }
}
