use crate::domain::a010_proposal::ui::details::PropuestaDetails;
use crate::shared::document_actions::document_buttons;
use crate::shared::export::pdf::clinical::ClinicalDocument;
use crate::shared::list_controller::ListController;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a010_proposal::Propuesta;
use contracts::domain::common::{display_ref, DeleteGuard};
use leptos::prelude::*;

fn propuesta_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <PropuestaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

fn propuesta_actions(ctrl: ListController<Propuesta>, p: &Propuesta) -> AnyView {
    document_buttons(
        ctrl.modal(),
        ctrl.notify(),
        p.paciente.as_ref().map(|r| r.id),
        ClinicalDocument::from_propuesta(p),
    )
    .into_any()
}

#[component]
pub fn PropuestaList() -> impl IntoView {
    resource_list(
        ListScreen::<Propuesta>::new("a010_proposal--list", |p| {
            format!("{} ({})", p.numero(), display_ref(&p.paciente))
        })
        .with_form(propuesta_form)
        .wide_form()
        .with_placeholder("Buscar por paciente o doctor...")
        .with_delete_guard(<Propuesta as DeleteGuard>::delete_blocked_reason)
        .with_row_extras(propuesta_actions),
    )
}
