//! Выбор связанной записи (пациент, доктор, лаборатория...) из справочника.

use crate::shared::api_utils;
use crate::shared::components::form_fields::{Binding, SelectField};
use contracts::domain::common::Resource;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

/// `<select>` по всем записям `E`.
///
/// Неактивные записи не предлагаются, кроме уже выбранной.
pub fn entity_select<E>(
    label: &'static str,
    bind: Binding,
    option_label: fn(&E) -> String,
    required: bool,
) -> impl IntoView
where
    E: Resource + DeserializeOwned + Send + Sync + 'static,
{
    let options = RwSignal::new(Vec::<(String, String)>::new());

    spawn_local(async move {
        match api_utils::fetch_all::<E>("").await {
            Ok(rows) => {
                let selected = bind.value.get_untracked();
                let items = rows
                    .iter()
                    .filter(|r| {
                        r.estado().map(|e| e.is_active()).unwrap_or(true)
                            || r.id().to_string() == selected
                    })
                    .map(|r| (r.id().to_string(), option_label(r)))
                    .collect();
                options.set(items);
            }
            Err(e) => log::error!("{}: failed to load options: {}", E::PATH, e),
        }
    });

    view! {
        <SelectField
            label=label
            bind=bind
            options=options
            empty_label="-- Seleccione --"
            required=required
        />
    }
}
