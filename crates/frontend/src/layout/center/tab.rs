use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = AppGlobalContext::use_global();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.with(|a| a.as_deref() == Some(key_for_active.as_str())));

    let key_for_click = tab.key.clone();
    let on_click = move |_| ctx.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div class="tabs__tab" class:tabs__tab--active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tabs__close" title="Cerrar" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}
