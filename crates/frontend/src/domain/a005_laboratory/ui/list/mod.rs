use crate::domain::a005_laboratory::ui::details::LaboratorioDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a005_laboratory::Laboratorio;
use leptos::prelude::*;

fn laboratorio_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <LaboratorioDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn LaboratorioList() -> impl IntoView {
    resource_list(
        ListScreen::<Laboratorio>::new("a005_laboratory--list", |l| l.nombre.clone())
            .with_form(laboratorio_form)
            .estado_in_report(),
    )
}
