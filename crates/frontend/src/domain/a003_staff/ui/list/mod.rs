use crate::domain::a003_staff::ui::details::PersonalDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a003_staff::Personal;
use leptos::prelude::*;

fn personal_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <PersonalDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn PersonalList() -> impl IntoView {
    resource_list(
        ListScreen::<Personal>::new("a003_staff--list", |p| format!("{} {}", p.nombre, p.apellido))
            .with_form(personal_form)
            .estado_in_report(),
    )
}
