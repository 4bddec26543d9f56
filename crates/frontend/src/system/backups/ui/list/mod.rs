//! Резервные копии: создание на бэкенде, скачивание файла, удаление.

use crate::shared::api_utils;
use crate::shared::dialogs::{confirm, show_error, ConfirmOptions};
use crate::shared::export::download_blob;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::resource_list::{resource_list, ListScreen};
use crate::system::auth::guard::RequireAdmin;
use contracts::domain::common::Resource;
use contracts::system::backups::Backup;
use leptos::prelude::*;
use serde_json::json;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

fn create_backup(ctrl: ListController<Backup>) {
    let options = ConfirmOptions::new(
        "Nueva copia de seguridad",
        "Se generará una copia completa de la base de datos. ¿Continuar?",
    )
    .confirm_label("Crear copia");
    confirm(
        ctrl.modal(),
        options,
        Callback::new(move |_| {
            ctrl.notify().info("Generando copia de seguridad...");
            spawn_local(async move {
                match api_utils::post_json(Backup::PATH, &json!({})).await {
                    Ok(_) => {
                        ctrl.notify().success("Copia de seguridad creada");
                        ctrl.refetch();
                    }
                    Err(e) => show_error(ctrl.modal(), e),
                }
            });
        }),
    );
}

fn download_backup(ctrl: ListController<Backup>, backup: Backup) {
    spawn_local(async move {
        let result = api_utils::get_blob(&backup.download_path())
            .await
            .and_then(|blob| download_blob(&blob, &backup.nombre_archivo));
        if let Err(e) = result {
            log::error!("backup {} download failed: {}", backup.id, e);
            show_error(ctrl.modal(), e);
        }
    });
}

fn backup_header(ctrl: ListController<Backup>) -> AnyView {
    view! {
        <Button appearance=ButtonAppearance::Primary on_click=move |_| create_backup(ctrl)>
            {icon("database")}
            " Crear copia"
        </Button>
    }
    .into_any()
}

fn backup_actions(ctrl: ListController<Backup>, backup: &Backup) -> AnyView {
    let backup = backup.clone();
    view! {
        <button
            class="icon-button"
            title="Descargar"
            on:click=move |_| download_backup(ctrl, backup.clone())
        >
            {icon("download")}
        </button>
    }
    .into_any()
}

#[component]
pub fn BackupList() -> impl IntoView {
    view! {
        <RequireAdmin>
            {resource_list(
                ListScreen::<Backup>::new("sys_backups--list", |b| b.nombre_archivo.clone())
                    .with_header_extras(backup_header)
                    .with_row_extras(backup_actions),
            )}
        </RequireAdmin>
    }
}
