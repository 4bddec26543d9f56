use super::view_model::{password_hint, rol_options, UsuarioDetailsViewModel};
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::form_fields::{bind_text, SelectField, TextField};
use contracts::system::auth::Rol;
use leptos::prelude::*;

#[component]
pub fn UsuarioDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = UsuarioDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;
    let is_edit = move || form.with(|f| f.is_edit());

    view! {
        <DetailsShell
            vm=vm
            title_create="Nuevo usuario"
            title_edit="Editar usuario"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <div class="form__grid">
                <TextField label="Usuario" required=true
                    bind=bind_text(form, |f| f.usuario.clone(), |f, v| f.usuario = v) />
                <TextField label="Nombre completo" required=true
                    bind=bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v) />
                <TextField label="Email" input_type="email"
                    bind=bind_text(form, |f| f.email.clone(), |f, v| f.email = v) />
                <SelectField
                    label="Rol"
                    options=rol_options()
                    bind=bind_text(form, |f| f.rol.code().to_string(), |f, v| f.rol = Rol::from_code(&v))
                />
                <div class="form__group">
                    <TextField label="Contraseña" input_type="password"
                        bind=bind_text(form, |f| f.password.clone(), |f, v| f.password = v) />
                    <small class="form__hint">{move || password_hint(is_edit())}</small>
                </div>
            </div>
        </DetailsShell>
    }
}
