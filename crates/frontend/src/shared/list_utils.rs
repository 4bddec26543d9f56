//! Поиск по спискам: поле ввода с задержкой перед запросом.

use crate::shared::clinic::SEARCH_DEBOUNCE_MS;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Поле поиска с debounce и кнопкой очистки.
///
/// `on_change` вызывается только после паузы `SEARCH_DEBOUNCE_MS`
/// без ввода; каждое нажатие клавиши переносит таймер.
#[component]
pub fn SearchInput(
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let pending_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let (Some(id), Some(window)) = (pending_timeout.get_value(), web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
        pending_timeout.set_value(None);
    };

    let schedule = move |text: String| {
        cancel_pending();
        let Some(window) = web_sys::window() else {
            on_change.run(text);
            return;
        };
        let callback = Closure::once_into_js(move || {
            pending_timeout.set_value(None);
            on_change.run(text);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS as i32,
        ) {
            Ok(id) => pending_timeout.set_value(Some(id)),
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let clear = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    set_input_value.set(text.clone());
                    schedule(text);
                }
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Limpiar" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
