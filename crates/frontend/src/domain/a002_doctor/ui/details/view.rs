use super::view_model::DoctorDetailsViewModel;
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::form_fields::{bind_text, TextField};
use crate::shared::components::phone_input::PhoneInput;
use leptos::prelude::*;

#[component]
pub fn DoctorDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DoctorDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Nuevo doctor"
            title_edit="Editar doctor"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <div class="form__grid">
                <TextField label="Nombre" required=true
                    bind=bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v) />
                <TextField label="Apellido" required=true
                    bind=bind_text(form, |f| f.apellido.clone(), |f, v| f.apellido = v) />
                <TextField label="Especialidad" required=true placeholder="Odontología general"
                    bind=bind_text(form, |f| f.especialidad.clone(), |f, v| f.especialidad = v) />
                <TextField label="Matrícula"
                    bind=bind_text(form, |f| f.matricula.clone(), |f, v| f.matricula = v) />
                <PhoneInput label="Teléfono"
                    code=bind_text(form, |f| f.codigo_pais.clone(), |f, v| f.codigo_pais = v)
                    local=bind_text(form, |f| f.telefono.clone(), |f, v| f.telefono = v) />
                <TextField label="Email" input_type="email"
                    bind=bind_text(form, |f| f.email.clone(), |f, v| f.email = v) />
            </div>
        </DetailsShell>
    }
}
