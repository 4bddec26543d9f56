use super::view_model::FormaPagoDetailsViewModel;
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::form_fields::{bind_text, TextAreaField, TextField};
use leptos::prelude::*;

#[component]
pub fn FormaPagoDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FormaPagoDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Nueva forma de pago"
            title_edit="Editar forma de pago"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <TextField label="Nombre" required=true placeholder="Efectivo, QR, transferencia..."
                bind=bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v) />
            <TextAreaField label="Descripción" rows=2
                bind=bind_text(form, |f| f.descripcion.clone(), |f, v| f.descripcion = v) />
        </DetailsShell>
    }
}
