use crate::domain::a008_payment::ui::details::PagoDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a008_payment::Pago;
use contracts::domain::common::display_ref;
use contracts::shared::money::format_bs;
use leptos::prelude::*;

fn pago_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <PagoDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn PagoList() -> impl IntoView {
    resource_list(
        ListScreen::<Pago>::new("a008_payment--list", |p| {
            format!("{} de {}", format_bs(p.monto), display_ref(&p.paciente))
        })
        .with_form(pago_form)
        .with_placeholder("Buscar por paciente o concepto..."),
    )
}
