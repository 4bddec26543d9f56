//! Утверждение проформы кодом, который сообщает пациент.

use crate::shared::api_utils;
use crate::shared::dialogs::show_error;
use crate::shared::list_controller::ListController;
use contracts::domain::a009_proforma::{AprobacionDto, Proforma};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const DIALOG_STYLE: &str = "width: min(420px, 92vw);";

pub fn approval_path(id: i64) -> String {
    format!("{}/{}/aprobar", Proforma::PATH, id)
}

pub fn open_approval(ctrl: ListController<Proforma>, id: i64, numero: String) {
    ctrl.modal().push_with_frame(Some(DIALOG_STYLE.to_string()), move |handle| {
        let codigo = RwSignal::new(String::new());
        let error = RwSignal::new(None::<String>);
        let sending = RwSignal::new(false);
        let numero = numero.clone();

        let cancel = {
            let handle = handle.clone();
            move |_| handle.close()
        };
        let approve = move |_| {
            let Some(body) = AprobacionDto::new(&codigo.get_untracked()) else {
                error.set(Some("Ingrese el código de aprobación".to_string()));
                return;
            };
            let handle = handle.clone();
            sending.set(true);
            spawn_local(async move {
                let result = api_utils::patch_json(&approval_path(id), &body).await;
                sending.set(false);
                match result {
                    Ok(_) => {
                        handle.close();
                        ctrl.notify().success("Presupuesto aprobado");
                        ctrl.refetch();
                    }
                    Err(e) => show_error(ctrl.modal(), e),
                }
            });
        };

        view! {
            <div class="dialog">
                <div class="dialog__header">
                    <h3>{format!("Aprobar presupuesto {}", numero)}</h3>
                </div>
                <p class="dialog__message">"Ingrese el código de aprobación entregado por el paciente."</p>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Código"
                    prop:value=move || codigo.get()
                    on:input=move |ev| {
                        error.set(None);
                        codigo.set(event_target_value(&ev));
                    }
                />
                {move || error.get().map(|e| view! { <div class="details__error">{e}</div> })}
                <div class="dialog__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=approve
                        disabled=Signal::derive(move || sending.get())
                    >
                        "Aprobar"
                    </Button>
                </div>
            </div>
        }
        .into_any()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approval_path() {
        assert_eq!(approval_path(12), "/proformas/12/aprobar");
    }
}
