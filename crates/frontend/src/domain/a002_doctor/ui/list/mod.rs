use crate::domain::a002_doctor::ui::details::DoctorDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a002_doctor::Doctor;
use leptos::prelude::*;

fn doctor_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <DoctorDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn DoctorList() -> impl IntoView {
    resource_list(
        ListScreen::<Doctor>::new("a002_doctor--list", Doctor::full_name)
            .with_form(doctor_form)
            .with_placeholder("Buscar por nombre o especialidad...")
            .estado_in_report(),
    )
}
