//! Действия строки для клинических документов: скачать PDF и отправить
//! его пациенту через WhatsApp.

use crate::shared::api_utils;
use crate::shared::dialogs::{confirm, show_error, ConfirmOptions};
use crate::shared::export::pdf::clinical::{clinical_pdf_blob, download_clinical, ClinicalDocument};
use crate::shared::export::whatsapp;
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotificationService;
use contracts::domain::a001_patient::Paciente;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub fn download_document(modal: ModalStackService, doc: ClinicalDocument) {
    spawn_local(async move {
        if let Err(e) = download_clinical(&doc).await {
            log::error!("{}: pdf failed: {}", doc.numero, e);
            show_error(modal, e);
        }
    });
}

/// Телефон берётся из карточки пациента: в документе его нет
async fn patient_phone(paciente_id: i64) -> Result<String, String> {
    api_utils::fetch_by_id::<Paciente>(paciente_id)
        .await
        .map(|p| p.telefono)
}

async fn send_whatsapp(phone: &str, doc: &ClinicalDocument) -> Result<(), String> {
    let blob = clinical_pdf_blob(doc).await?;
    whatsapp::send_pdf(&blob, &doc.file_name(), phone, &doc.whatsapp_message()).await
}

/// Сервер не отправил PDF, но номер есть: чат `wa.me` с тем же текстом
fn offer_chat(modal: ModalStackService, phone: String, message: String, error: String) {
    if !whatsapp::can_open_chat(&phone) {
        show_error(modal, error);
        return;
    }
    let options = ConfirmOptions::new(
        "No se pudo enviar el PDF",
        format!("{}. ¿Abrir el chat de WhatsApp con el paciente?", error),
    )
    .confirm_label("Abrir chat");
    confirm(
        modal,
        options,
        Callback::new(move |_| whatsapp::open_chat(&phone, &message)),
    );
}

pub fn send_document_whatsapp(
    modal: ModalStackService,
    notify: NotificationService,
    paciente_id: Option<i64>,
    doc: ClinicalDocument,
) {
    let Some(paciente_id) = paciente_id else {
        show_error(modal, "El documento no tiene un paciente asociado");
        return;
    };
    let options = ConfirmOptions::new(
        "Enviar por WhatsApp",
        format!("¿Enviar el documento {} a {}?", doc.numero, doc.paciente),
    )
    .confirm_label("Enviar");

    confirm(
        modal,
        options,
        Callback::new(move |_| {
            let doc = doc.clone();
            notify.info("Enviando documento...");
            spawn_local(async move {
                let phone = match patient_phone(paciente_id).await {
                    Ok(phone) => phone,
                    Err(e) => {
                        log::error!("{}: patient {} load failed: {}", doc.numero, paciente_id, e);
                        show_error(modal, e);
                        return;
                    }
                };
                match send_whatsapp(&phone, &doc).await {
                    Ok(()) => notify.success("Documento enviado por WhatsApp"),
                    Err(e) => {
                        log::error!("{}: whatsapp failed: {}", doc.numero, e);
                        offer_chat(modal, phone, doc.whatsapp_message(), e);
                    }
                }
            });
        }),
    );
}

/// Кнопки PDF и WhatsApp для строки списка
pub fn document_buttons(
    modal: ModalStackService,
    notify: NotificationService,
    paciente_id: Option<i64>,
    doc: ClinicalDocument,
) -> impl IntoView {
    let for_pdf = doc.clone();
    view! {
        <button
            class="icon-button"
            title="Descargar PDF"
            on:click=move |_| download_document(modal, for_pdf.clone())
        >
            {icon("file-pdf")}
        </button>
        <button
            class="icon-button icon-button--whatsapp"
            title="Enviar por WhatsApp"
            on:click=move |_| send_document_whatsapp(modal, notify, paciente_id, doc.clone())
        >
            {icon("whatsapp")}
        </button>
    }
}
