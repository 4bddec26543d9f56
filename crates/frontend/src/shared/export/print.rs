//! Печать через скрытый iframe.
//!
//! HTML кладётся в `srcdoc`, дальше ждём загрузку документа и картинок
//! (логотип), но не дольше `PRINT_LOGO_TIMEOUT_MS`. После `print()`
//! iframe удаляется с задержкой `PRINT_CLEANUP_DELAY_MS`.

use super::{print_template, ReportSpec};
use crate::shared::clinic::{LOGO_PATH, PRINT_CLEANUP_DELAY_MS, PRINT_LOGO_TIMEOUT_MS};
use crate::shared::date_utils::now_label;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlIFrameElement, HtmlImageElement};

const POLL_STEP_MS: u32 = 100;

pub fn print_report(spec: &ReportSpec) -> Result<(), String> {
    print_html(print_template::render(spec, LOGO_PATH, &now_label()))
}

/// Печатает готовый HTML-документ
pub fn print_html(html: String) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let iframe = document
        .create_element("iframe")
        .map_err(|e| format!("Failed to create iframe: {:?}", e))?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|e| format!("Failed to cast iframe: {:?}", e))?;
    let _ = iframe.set_attribute(
        "style",
        "position:fixed;right:0;bottom:0;width:0;height:0;border:0;visibility:hidden;",
    );
    iframe.set_srcdoc(&html);
    body.append_child(&iframe)
        .map_err(|e| format!("Failed to append iframe: {:?}", e))?;

    spawn_local(async move {
        let mut waited = 0;
        while waited < PRINT_LOGO_TIMEOUT_MS {
            if iframe.content_document().is_some_and(|d| is_ready(&d)) {
                break;
            }
            TimeoutFuture::new(POLL_STEP_MS).await;
            waited += POLL_STEP_MS;
        }
        if waited >= PRINT_LOGO_TIMEOUT_MS {
            log::warn!("print: logo not loaded after {} ms, printing anyway", waited);
        }

        match iframe.content_window() {
            Some(frame_window) => {
                let _ = frame_window.focus();
                if let Err(e) = frame_window.print() {
                    log::error!("print() failed: {:?}", e);
                }
            }
            None => log::error!("print: iframe has no window"),
        }

        TimeoutFuture::new(PRINT_CLEANUP_DELAY_MS).await;
        iframe.remove();
    });

    Ok(())
}

/// Документ загружен и все картинки догрузились (или упали)
fn is_ready(document: &Document) -> bool {
    if document.ready_state() != "complete" {
        return false;
    }
    let images = document.images();
    (0..images.length()).all(|i| {
        images
            .item(i)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .map(|img| img.complete())
            .unwrap_or(true)
    })
}
