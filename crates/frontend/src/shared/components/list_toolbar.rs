use crate::shared::export::ExportKind;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;

/// Поиск слева, выгрузки справа
#[component]
pub fn ListToolbar(
    #[prop(into)] on_search: Callback<String>,
    on_export: Callback<ExportKind>,
    #[prop(optional, into)] placeholder: String,
    /// Пока идёт выгрузка, кнопки неактивны
    #[prop(optional, into)]
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="list-toolbar">
            <SearchInput on_change=on_search placeholder=placeholder />
            <div class="list-toolbar__exports">
                {[ExportKind::Print, ExportKind::Pdf, ExportKind::Excel]
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="button button--secondary button--small"
                                title=kind.label()
                                disabled=move || busy.get()
                                on:click=move |_| on_export.run(kind)
                            >
                                {icon(kind.icon())}
                                <span>{kind.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
