//! Диалоги подтверждения и ошибки поверх `ModalStackService`.

use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;
use thaw::*;

const DIALOG_STYLE: &str = "width: min(440px, 92vw);";

#[derive(Debug, Clone)]
pub struct ConfirmOptions {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    /// Красная кнопка для необратимых действий
    pub danger: bool,
}

impl ConfirmOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Confirmar",
            danger: false,
        }
    }

    pub fn confirm_label(mut self, label: &'static str) -> Self {
        self.confirm_label = label;
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

/// Спрашивает подтверждение; `on_confirm` вызывается только по кнопке.
pub fn confirm(modal: ModalStackService, options: ConfirmOptions, on_confirm: Callback<()>) {
    modal.push_with_frame(Some(DIALOG_STYLE.to_string()), move |handle| {
        let options = options.clone();
        let cancel = {
            let handle = handle.clone();
            move |_| handle.close()
        };
        let accept = {
            let handle = handle.clone();
            move |_| {
                handle.close();
                on_confirm.run(());
            }
        };
        let accept_class = if options.danger {
            "dialog__danger"
        } else {
            ""
        };

        view! {
            <div class="dialog">
                <div class="dialog__header">
                    <h3>{options.title}</h3>
                </div>
                <p class="dialog__message">{options.message}</p>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        class=accept_class
                        on_click=accept
                    >
                        {options.confirm_label}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}

/// Блокирующее окно с текстом ошибки; закрывается только кнопкой «Aceptar».
pub fn show_error(modal: ModalStackService, message: impl Into<String>) {
    let message = message.into();
    modal.push_blocking(Some(DIALOG_STYLE.to_string()), move |handle| {
        let close = {
            let handle = handle.clone();
            move |_| handle.close()
        };
        view! {
            <div class="dialog dialog--error">
                <div class="dialog__header">
                    <span class="dialog__icon">{icon("x")}</span>
                    <h3>"Error"</h3>
                </div>
                <p class="dialog__message">{message.clone()}</p>
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=close>
                        "Aceptar"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}
