use crate::domain::a001_patient::ui::details::PacienteDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a001_patient::Paciente;
use leptos::prelude::*;

fn paciente_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <PacienteDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn PacienteList() -> impl IntoView {
    resource_list(
        ListScreen::<Paciente>::new("a001_patient--list", Paciente::full_name)
            .with_form(paciente_form)
            .with_placeholder("Buscar por nombre, apellido o CI...")
            .estado_in_report(),
    )
}
