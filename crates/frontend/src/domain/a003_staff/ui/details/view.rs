use super::view_model::PersonalDetailsViewModel;
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::form_fields::{bind_text, TextField};
use crate::shared::components::phone_input::PhoneInput;
use leptos::prelude::*;

#[component]
pub fn PersonalDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PersonalDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Nuevo personal"
            title_edit="Editar personal"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <div class="form__grid">
                <TextField label="Nombre" required=true
                    bind=bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v) />
                <TextField label="Apellido" required=true
                    bind=bind_text(form, |f| f.apellido.clone(), |f, v| f.apellido = v) />
                <TextField label="CI"
                    bind=bind_text(form, |f| f.ci.clone(), |f, v| f.ci = v) />
                <TextField label="Cargo" required=true placeholder="Asistente, recepción..."
                    bind=bind_text(form, |f| f.cargo.clone(), |f, v| f.cargo = v) />
                <PhoneInput label="Teléfono"
                    code=bind_text(form, |f| f.codigo_pais.clone(), |f, v| f.codigo_pais = v)
                    local=bind_text(form, |f| f.telefono.clone(), |f, v| f.telefono = v) />
                <TextField label="Email" input_type="email"
                    bind=bind_text(form, |f| f.email.clone(), |f, v| f.email = v) />
                <TextField label="Fecha de ingreso" input_type="date"
                    bind=bind_text(form, |f| f.fecha_ingreso.clone(), |f, v| f.fecha_ingreso = v) />
            </div>
        </DetailsShell>
    }
}
