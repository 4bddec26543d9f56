//! Всплывающие уведомления об успехе и ошибке.
//!
//! Устроено как `ModalStackService`: сервис с сигналом-списком в контексте
//! корня и один `ToastHost`, который его рисует.

use crate::shared::clinic::TOAST_TTL_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn show(&self, kind: ToastKind, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|t| {
            t.push(Toast {
                id,
                kind,
                text: text.into(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TTL_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(ToastKind::Info, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|x| x.id != id));
    }
}

pub fn use_notify() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_notify();

    view! {
        <div class="toast-host">
            <For
                each=move || svc.toasts.get()
                key=|t| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() on:click=move |_| svc.dismiss(id)>
                            {t.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
