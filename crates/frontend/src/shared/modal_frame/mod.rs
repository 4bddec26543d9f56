use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Подложка + поверхность модального окна.
///
/// Заголовок и кнопки рисует содержимое: форма выглядит одинаково
/// и в окне, и во вкладке.
#[component]
pub fn ModalFrame(
    on_close: Callback<()>,
    /// Закрывать по клику на подложку (по умолчанию да)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    #[prop(optional)]
    z_index: Option<i32>,
    /// Дополнительный style для `div.modal`
    #[prop(optional, into)]
    modal_style: String,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    fn on_overlay_itself(ev: &ev::MouseEvent) -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    }

    // закрываем только если и нажатие, и отпускание были на подложке:
    // выделение текста в форме не должно закрывать окно
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(on_overlay_itself(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = close_on_overlay && pressed_on_overlay.get() && on_overlay_itself(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_style = if modal_style.is_empty() {
        "position: relative;".to_string()
    } else {
        format!("position: relative; {}", modal_style)
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {};", z_index)
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div class="modal" style=surface_style on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
