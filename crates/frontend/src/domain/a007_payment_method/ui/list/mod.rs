use crate::domain::a007_payment_method::ui::details::FormaPagoDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a007_payment_method::FormaPago;
use leptos::prelude::*;

fn forma_pago_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <FormaPagoDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn FormaPagoList() -> impl IntoView {
    resource_list(
        ListScreen::<FormaPago>::new("a007_payment_method--list", |f| f.nombre.clone())
            .with_form(forma_pago_form)
            .estado_in_report(),
    )
}
