use crate::domain::a006_laboratory_work::ui::details::TrabajoLaboratorioDetails;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a006_laboratory_work::TrabajoLaboratorio;
use leptos::prelude::*;

fn trabajo_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <TrabajoLaboratorioDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

#[component]
pub fn TrabajoLaboratorioList() -> impl IntoView {
    // «Estado» отчёта здесь этап работы, активность записи отдельно
    resource_list(
        ListScreen::<TrabajoLaboratorio>::new("a006_laboratory_work--list", |t| {
            format!("{} ({})", t.descripcion, t.laboratorio_nombre())
        })
        .with_form(trabajo_form)
        .wide_form()
        .with_placeholder("Buscar por trabajo, paciente o laboratorio...")
        .estado_header("Registro"),
    )
}
