use contracts::domain::common::Estado;
use leptos::prelude::*;

#[component]
pub fn EstadoBadge(estado: Estado) -> impl IntoView {
    let class = if estado.is_active() {
        "badge badge--success"
    } else {
        "badge badge--neutral"
    };
    view! { <span class=class>{estado.label()}</span> }
}

/// Цветная метка с произвольным текстом ("Aprobado", "En proceso"...)
#[component]
pub fn Badge(
    #[prop(into)] text: String,
    /// "primary", "success", "warning", "error"; иначе нейтральная
    #[prop(optional)]
    variant: &'static str,
) -> impl IntoView {
    let variant_class = match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };
    view! { <span class=format!("badge {}", variant_class)>{text}</span> }
}
