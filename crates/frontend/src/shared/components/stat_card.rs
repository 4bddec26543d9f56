use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка одного показателя дашборда
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    /// Уже отформатированное значение; `None` пока грузится
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
    /// "success", "warning"; иначе обычная
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let class = match tone {
        "success" => "stat-card stat-card--success",
        "warning" => "stat-card stat-card--warning",
        _ => "stat-card",
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "-".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
