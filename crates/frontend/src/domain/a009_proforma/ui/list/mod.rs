mod approval;

use crate::domain::a009_proforma::ui::details::ProformaDetails;
use crate::shared::components::estado_badge::Badge;
use crate::shared::document_actions::document_buttons;
use crate::shared::export::pdf::clinical::ClinicalDocument;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::resource_list::{resource_list, ListScreen};
use approval::open_approval;
use contracts::domain::a009_proforma::Proforma;
use contracts::domain::common::{display_ref, DeleteGuard};
use leptos::prelude::*;

fn proforma_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <ProformaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

fn proforma_actions(ctrl: ListController<Proforma>, p: &Proforma) -> AnyView {
    let id = p.id;
    let numero = p.numero();
    let approval = if p.aprobado {
        view! { <Badge text="Aprobado" variant="success" /> }.into_any()
    } else {
        view! {
            <button
                class="icon-button"
                title="Aprobar"
                on:click=move |_| open_approval(ctrl, id, numero.clone())
            >
                {icon("check")}
            </button>
        }
        .into_any()
    };
    let documents = document_buttons(
        ctrl.modal(),
        ctrl.notify(),
        p.paciente.as_ref().map(|r| r.id),
        ClinicalDocument::from_proforma(p),
    );
    view! { {approval} {documents} }.into_any()
}

#[component]
pub fn ProformaList() -> impl IntoView {
    resource_list(
        ListScreen::<Proforma>::new("a009_proforma--list", |p| {
            format!("{} ({})", p.numero(), display_ref(&p.paciente))
        })
        .with_form(proforma_form)
        .wide_form()
        .with_placeholder("Buscar por paciente o doctor...")
        .with_delete_guard(<Proforma as DeleteGuard>::delete_blocked_reason)
        .with_row_extras(proforma_actions),
    )
}
