//! Редактор строк лечения (проформа, варианты предложения) с живым итогом.
//!
//! Строки адресуются индексом в векторе формы: редактор ничего не хранит
//! сам, только сообщает изменения наверх.

use crate::shared::components::form_fields::{number_text, parse_number};
use crate::shared::icons::icon;
use contracts::domain::common::{any_discount, lines_total, TreatmentLine};
use contracts::shared::money::format_money;
use leptos::prelude::*;

/// Строки одного блока вместе с их индексами в форме
pub type IndexedLines = Vec<(usize, TreatmentLine)>;

fn line_at(lines: &IndexedLines, index: usize) -> Option<TreatmentLine> {
    lines
        .iter()
        .find(|(i, _)| *i == index)
        .map(|(_, l)| l.clone())
}

/// Итог блока по текущим строкам
pub fn block_total(lines: &IndexedLines) -> f64 {
    let plain: Vec<TreatmentLine> = lines.iter().map(|(_, l)| l.clone()).collect();
    lines_total(&plain)
}

/// Скидка 0 не хранится
pub fn discount_from_input(text: &str) -> Option<f64> {
    let value = parse_number(text);
    (value > 0.0).then_some(value.min(100.0))
}

#[component]
fn LineRow(
    index: usize,
    lines: Signal<IndexedLines>,
    on_change: Callback<(usize, TreatmentLine)>,
    on_remove: Callback<usize>,
) -> impl IntoView {
    let read = move |f: fn(&TreatmentLine) -> String| {
        move || lines.with(|ls| line_at(ls, index).map(|l| f(&l)).unwrap_or_default())
    };
    let edit = move |apply: fn(&mut TreatmentLine, String), value: String| {
        if let Some(mut line) = lines.with_untracked(|ls| line_at(ls, index)) {
            apply(&mut line, value);
            on_change.run((index, line));
        }
    };

    view! {
        <tr>
            <td>
                <input class="form__input" type="text" placeholder="Tratamiento"
                    prop:value=read(|l| l.tratamiento.clone())
                    on:input=move |ev| edit(|l, v| l.tratamiento = v, event_target_value(&ev)) />
            </td>
            <td class="lines__narrow">
                <input class="form__input" type="text" placeholder="Pieza"
                    prop:value=read(|l| l.pieza.clone().unwrap_or_default())
                    on:input=move |ev| edit(|l, v| l.pieza = Some(v).filter(|p| !p.trim().is_empty()), event_target_value(&ev)) />
            </td>
            <td class="lines__narrow">
                <input class="form__input form__input--number" type="number" min="1" step="1"
                    value=read(|l| number_text(l.cantidad))
                    on:input=move |ev| edit(|l, v| l.cantidad = parse_number(&v), event_target_value(&ev)) />
            </td>
            <td>
                <input class="form__input form__input--number" type="number" min="0" step="0.01"
                    value=read(|l| number_text(l.precio_unitario))
                    on:input=move |ev| edit(|l, v| l.precio_unitario = parse_number(&v), event_target_value(&ev)) />
            </td>
            <td class="lines__narrow">
                <input class="form__input form__input--number" type="number" min="0" max="100" step="1"
                    value=read(|l| l.descuento.map(number_text).unwrap_or_default())
                    on:input=move |ev| edit(|l, v| l.descuento = discount_from_input(&v), event_target_value(&ev)) />
            </td>
            <td class="text-right">{read(|l| format_money(l.total()))}</td>
            <td class="table__actions">
                <button type="button" class="icon-button icon-button--danger" title="Quitar"
                    on:click=move |_| on_remove.run(index)>
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn TreatmentLinesEditor(
    #[prop(into)] lines: Signal<IndexedLines>,
    on_change: Callback<(usize, TreatmentLine)>,
    on_remove: Callback<usize>,
    on_add: Callback<()>,
    /// Заголовок блока, например «Opción B»
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let total = move || lines.with(|ls| format_money(block_total(ls)));
    let has_discount = move || {
        lines.with(|ls| {
            let plain: Vec<TreatmentLine> = ls.iter().map(|(_, l)| l.clone()).collect();
            any_discount(&plain)
        })
    };

    view! {
        <div class="lines">
            {title.map(|t| view! { <h4 class="lines__title">{t}</h4> })}
            <table class="table lines__table">
                <thead>
                    <tr>
                        <th>"Tratamiento"</th>
                        <th class="lines__narrow">"Pieza"</th>
                        <th class="lines__narrow">"Cant."</th>
                        <th>"P. Unit. (Bs.)"</th>
                        <th class="lines__narrow">"Desc. %"</th>
                        <th class="text-right">"Total (Bs.)"</th>
                        <th class="table__actions"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || {
                            lines.with(|ls| ls.iter().map(|(i, _)| *i).collect::<Vec<_>>())
                        }
                        key=|index| *index
                        children=move |index| {
                            view! {
                                <LineRow
                                    index=index
                                    lines=lines
                                    on_change=on_change
                                    on_remove=on_remove
                                />
                            }
                        }
                    />
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="5">
                            <button type="button" class="button button--secondary button--small"
                                on:click=move |_| on_add.run(())>
                                {icon("plus")}
                                " Agregar tratamiento"
                            </button>
                            <Show when=has_discount>
                                <span class="lines__hint">"Incluye descuentos"</span>
                            </Show>
                        </td>
                        <td class="text-right lines__total">{total}</td>
                        <td></td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_total() {
        let lines = vec![
            (0, TreatmentLine::new("Limpieza", 1.0, 150.0)),
            (3, TreatmentLine::new("Corona", 1.0, 1200.0).with_discount(10.0)),
        ];
        assert_eq!(block_total(&lines), 1230.0);
        assert_eq!(line_at(&lines, 3).map(|l| l.tratamiento), Some("Corona".to_string()));
        assert!(line_at(&lines, 1).is_none());
    }

    #[test]
    fn test_discount_from_input() {
        assert_eq!(discount_from_input(""), None);
        assert_eq!(discount_from_input("0"), None);
        assert_eq!(discount_from_input("15"), Some(15.0));
        assert_eq!(discount_from_input("150"), Some(100.0));
    }
}
