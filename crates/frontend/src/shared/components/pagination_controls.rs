use crate::shared::icons::icon;
use contracts::shared::pagination::PageWindow;
use leptos::prelude::*;

const VISIBLE_PAGES: usize = 5;

/// Пагинация с 1: «Mostrando 1-10 de 25», стрелки и окно номеров страниц.
#[component]
pub fn PaginationControls(
    #[prop(into)] window: Signal<PageWindow>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || window.get().label()}</span>
            <div class="pagination-pages">
                <button
                    class="pagination-btn"
                    title="Anterior"
                    disabled=move || !window.get().has_prev()
                    on:click=move |_| {
                        let w = window.get_untracked();
                        if w.has_prev() {
                            on_page_change.run(w.page - 1);
                        }
                    }
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    let w = window.get();
                    w.visible_pages(VISIBLE_PAGES)
                        .into_iter()
                        .map(|p| {
                            let class = if p == w.page {
                                "pagination-btn pagination-btn--active"
                            } else {
                                "pagination-btn"
                            };
                            view! {
                                <button class=class on:click=move |_| on_page_change.run(p)>
                                    {p.to_string()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    title="Siguiente"
                    disabled=move || !window.get().has_next()
                    on:click=move |_| {
                        let w = window.get_untracked();
                        if w.has_next() {
                            on_page_change.run(w.page + 1);
                        }
                    }
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
