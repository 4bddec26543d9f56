use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_style: Option<String>,
    /// Escape и клик по подложке закрывают окно
    dismissable: bool,
}

/// Handle, который получает построитель окна: окно закрывает себя само.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Стек модальных окон: формы, подтверждения и ошибки.
///
/// Escape закрывает только верхнее окно (см. `ModalHost`).
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    fn insert(&self, modal_style: Option<String>, dismissable: bool, builder: ModalBuilder) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_style,
                dismissable,
            })
        });
        ModalHandle { id, svc: *self }
    }

    /// Обычное окно, закрывается по Escape и по подложке.
    pub fn push<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.insert(None, true, Arc::new(builder))
    }

    /// Окно с собственным стилем поверхности (ширина формы и т.п.).
    pub fn push_with_frame<F>(&self, modal_style: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.insert(modal_style, true, Arc::new(builder))
    }

    /// Блокирующее окно: закрывается только своей кнопкой.
    pub fn push_blocking<F>(&self, modal_style: Option<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.insert(modal_style, false, Arc::new(builder))
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    // Закрытие на следующем тике: окно может быть удалено
    // во время обработки его же DOM-события.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn pop_dismissable_deferred(&self) {
        let top = self.stack.with_untracked(|s| s.last().map(|e| (e.id, e.dismissable)));
        if let Some((id, true)) = top {
            self.close_deferred(id);
        }
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

/// Рисует стек окон. Монтируется один раз в корне приложения.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.pop_dismissable_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // хост живёт всё время работы приложения
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let view = (entry.builder)(ModalHandle { id, svc });
                    view! {
                        <ModalFrame
                            z_index=1000 + idx as i32
                            on_close=on_close
                            close_on_overlay=entry.dismissable
                            modal_style=entry.modal_style.clone().unwrap_or_default()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
