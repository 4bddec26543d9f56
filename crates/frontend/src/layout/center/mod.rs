pub mod tab;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use tab::Tab;

/// Полоса вкладок и под ней содержимое
#[component]
pub fn Center(children: Children) -> impl IntoView {
    let ctx = AppGlobalContext::use_global();

    view! {
        <div data-zone="center" class="app-tabs">
            <div class="tabs__bar">
                <For
                    each=move || ctx.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <Tab tab=tab /> }
                />
            </div>
            <Show when=move || ctx.opened.with(Vec::is_empty)>
                <div class="tabs__empty">"Seleccione una sección en el menú"</div>
            </Show>
            <div class="tabs__content">{children()}</div>
        </div>
    }
}
