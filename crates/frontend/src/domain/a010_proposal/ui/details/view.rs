use crate::shared::date_utils::today_iso;
use super::view_model::{
    add_option, new_propuesta_form, option_lines, set_line, PropuestaDetailsViewModel,
};
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::entity_select::entity_select;
use crate::shared::components::form_fields::{bind_id, bind_text, TextAreaField, TextField};
use crate::shared::components::treatment_lines::TreatmentLinesEditor;
use crate::shared::icons::icon;
use contracts::domain::a001_patient::Paciente;
use contracts::domain::a002_doctor::Doctor;
use contracts::domain::a010_proposal::Variante;
use contracts::domain::common::TreatmentLine;
use contracts::shared::money::format_bs;
use leptos::prelude::*;

#[component]
pub fn PropuestaDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PropuestaDetailsViewModel::with_form(new_propuesta_form(today_iso()));
    vm.load_if_needed(id);
    let form = vm.form;

    let on_change = Callback::new(move |(index, line): (usize, TreatmentLine)| {
        form.update(|f| set_line(f, index, line));
    });
    let on_remove = Callback::new(move |index: usize| form.update(|f| f.remove_item(index)));
    let can_add_option = Signal::derive(move || form.with(|f| f.next_option().is_some()));

    let option_block = move |opcion: Variante| {
        let lines = Signal::derive(move || form.with(|f| option_lines(f, opcion)));
        let on_add = Callback::new(move |_| form.update(|f| f.add_item(opcion)));
        view! {
            <TreatmentLinesEditor
                title=opcion.label()
                lines=lines
                on_change=on_change
                on_remove=on_remove
                on_add=on_add
            />
        }
    };

    let summary = move || {
        form.with(|f| {
            f.options()
                .into_iter()
                .map(|v| view! {
                    <tr>
                        <td>{v.label()}</td>
                        <td class="text-right">{format_bs(f.total_for(v))}</td>
                    </tr>
                })
                .collect_view()
        })
    };

    view! {
        <DetailsShell
            vm=vm
            title_create="Nueva propuesta"
            title_edit="Editar propuesta"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <div class="form__grid">
                {entity_select::<Paciente>(
                    "Paciente",
                    bind_id(form, |f| f.paciente_id, |f, v| f.paciente_id = v),
                    Paciente::full_name,
                    true,
                )}
                {entity_select::<Doctor>(
                    "Doctor",
                    bind_id(form, |f| f.doctor_id, |f, v| f.doctor_id = v),
                    Doctor::full_name,
                    false,
                )}
                <TextField label="Fecha" input_type="date" required=true
                    bind=bind_text(form, |f| f.fecha.clone(), |f, v| f.fecha = v) />
            </div>

            <For
                each=move || form.with(|f| f.options())
                key=|opcion| *opcion
                children=option_block
            />

            <div class="lines__toolbar">
                <button
                    type="button"
                    class="button button--secondary button--small"
                    disabled=move || !can_add_option.get()
                    on:click=move |_| {
                        form.update(|f| {
                            add_option(f);
                        });
                    }
                >
                    {icon("plus")}
                    " Agregar opción"
                </button>
            </div>

            <table class="table table--compact totals-summary">
                <thead>
                    <tr>
                        <th>"Resumen de opciones"</th>
                        <th class="text-right">"Total"</th>
                    </tr>
                </thead>
                <tbody>{summary}</tbody>
            </table>

            <TextAreaField label="Descripción" rows=2
                bind=bind_text(form, |f| f.descripcion.clone(), |f, v| f.descripcion = v) />
        </DetailsShell>
    }
}
