use crate::shared::resource_list::{resource_list, ListScreen};
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::ui::details::UsuarioDetails;
use contracts::system::users::Usuario;
use leptos::prelude::*;

fn usuario_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <UsuarioDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn UsuarioList() -> impl IntoView {
    view! {
        <RequireAdmin>
            {resource_list(
                ListScreen::<Usuario>::new("sys_users--list", |u| u.usuario.clone())
                    .with_form(usuario_form)
                    .with_placeholder("Buscar usuario o nombre...")
                    .estado_in_report(),
            )}
        </RequireAdmin>
    }
}
