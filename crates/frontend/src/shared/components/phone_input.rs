use contracts::shared::phone::COUNTRY_CODES;
use leptos::prelude::*;

use super::form_fields::Binding;

/// Телефон: код страны отдельным списком, номер без кода.
#[component]
pub fn PhoneInput(
    #[prop(into)] label: String,
    code: Binding,
    local: Binding,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <div class="phone-input">
                <select
                    class="form__select phone-input__code"
                    prop:value=move || code.value.get()
                    on:change=move |ev| code.on_input.run(event_target_value(&ev))
                >
                    {COUNTRY_CODES
                        .iter()
                        .map(|(c, country)| {
                            let c = *c;
                            view! {
                                <option value=c selected=move || code.value.get() == c>
                                    {format!("{} {}", country, c)}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    class="form__input phone-input__local"
                    type="tel"
                    inputmode="numeric"
                    required=required
                    prop:value=move || local.value.get()
                    on:input=move |ev| local.on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}
