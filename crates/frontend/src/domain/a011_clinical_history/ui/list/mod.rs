use crate::domain::a011_clinical_history::ui::details::HistoriaClinicaDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a011_clinical_history::HistoriaClinica;
use contracts::domain::common::display_ref;
use leptos::prelude::*;

fn historia_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <HistoriaClinicaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn HistoriaClinicaList() -> impl IntoView {
    resource_list(
        ListScreen::<HistoriaClinica>::new("a011_clinical_history--list", |h| {
            format!("{} ({})", h.motivo_consulta, display_ref(&h.paciente))
        })
        .with_form(historia_form)
        .wide_form()
        .with_placeholder("Buscar por paciente, motivo o diagnóstico..."),
    )
}
