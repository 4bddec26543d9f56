use super::view_model::RespuestaChatbotDetailsViewModel;
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::form_fields::{bind_text, TextAreaField, TextField};
use leptos::prelude::*;

#[component]
pub fn RespuestaChatbotDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = RespuestaChatbotDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Nueva respuesta automática"
            title_edit="Editar respuesta automática"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <TextField label="Palabra clave" required=true placeholder="horario, precios, ubicación..."
                bind=bind_text(form, |f| f.palabra_clave.clone(), |f, v| f.palabra_clave = v) />
            <TextAreaField label="Respuesta" required=true rows=5
                bind=bind_text(form, |f| f.respuesta.clone(), |f, v| f.respuesta = v) />
        </DetailsShell>
    }
}
