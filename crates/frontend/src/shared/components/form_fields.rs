//! Поля форм, привязанные к полю структуры внутри `RwSignal<Form>`.
//!
//! ```rust,ignore
//! <TextField label="Nombre" required=true
//!     bind=bind_text(vm.form, |f| f.nombre.clone(), |f, v| f.nombre = v) />
//! ```

use leptos::prelude::*;

/// Значение + обработчик ввода одного текстового поля
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

pub fn bind_text<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> String,
    set: fn(&mut F, String),
) -> Binding {
    Binding {
        value: Signal::derive(move || form.with(get)),
        on_input: Callback::new(move |v: String| form.update(|f| set(f, v))),
    }
}

/// Числовое поле; пустой или нечисловой ввод даёт 0
pub fn bind_number<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> f64,
    set: fn(&mut F, f64),
) -> Binding {
    Binding {
        value: Signal::derive(move || number_text(form.with(get))),
        on_input: Callback::new(move |v: String| form.update(|f| set(f, parse_number(&v)))),
    }
}

/// Связь по id (`<select>` справочника); пустое значение даёт `None`
pub fn bind_id<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> Option<i64>,
    set: fn(&mut F, Option<i64>),
) -> Binding {
    Binding {
        value: Signal::derive(move || form.with(get).map(|id| id.to_string()).unwrap_or_default()),
        on_input: Callback::new(move |v: String| form.update(|f| set(f, v.parse().ok()))),
    }
}

/// "12,5" и "12.5" одинаково
pub fn parse_number(text: &str) -> f64 {
    text.trim().replace(',', ".").parse().unwrap_or(0.0)
}

pub fn number_text(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    bind: Binding,
    /// "text", "email", "password", "date"...
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <input
                class="form__input"
                type=input_type
                required=required
                placeholder=placeholder
                disabled=move || disabled.get()
                prop:value=move || bind.value.get()
                on:input=move |ev| bind.on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Число: значение пишется атрибутом, чтобы не сбивать ввод "1,"
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    bind: Binding,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] step: Option<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <input
                class="form__input form__input--number"
                type="number"
                min="0"
                step=step.unwrap_or_else(|| "0.01".to_string())
                required=required
                value=move || bind.value.get()
                on:input=move |ev| bind.on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    bind: Binding,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(3)
                required=required
                prop:value=move || bind.value.get()
                on:input=move |ev| bind.on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// `<select>` по готовому списку (значение, подпись)
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    bind: Binding,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    /// Пустой первый пункт, например "-- Seleccione --"
    #[prop(optional, into)]
    empty_label: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <select
                class="form__select"
                required=required
                prop:value=move || bind.value.get()
                on:change=move |ev| bind.on_input.run(event_target_value(&ev))
            >
                {empty_label.map(|l| view! { <option value="">{l}</option> })}
                <For
                    each=move || options.get()
                    key=|(val, label)| format!("{}:{}", val, label)
                    children=move |(val, label)| {
                        let current = val.clone();
                        view! {
                            <option value=val selected=move || bind.value.get() == current>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12,5"), 12.5);
        assert_eq!(parse_number(" 3 "), 3.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(0.0), "");
        assert_eq!(number_text(150.0), "150");
        assert_eq!(number_text(12.5), "12.5");
    }
}
