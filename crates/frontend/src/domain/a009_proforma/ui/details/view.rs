use crate::shared::date_utils::today_iso;
use super::view_model::{
    indexed_lines, new_proforma_form, set_line, total_summary, ProformaDetailsViewModel,
};
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::entity_select::entity_select;
use crate::shared::components::form_fields::{bind_id, bind_text, TextAreaField, TextField};
use crate::shared::components::treatment_lines::TreatmentLinesEditor;
use contracts::domain::a001_patient::Paciente;
use contracts::domain::a002_doctor::Doctor;
use contracts::domain::common::TreatmentLine;
use leptos::prelude::*;

#[component]
pub fn ProformaDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProformaDetailsViewModel::with_form(new_proforma_form(today_iso()));
    vm.load_if_needed(id);
    let form = vm.form;

    let lines = Signal::derive(move || form.with(indexed_lines));
    let on_change = Callback::new(move |(index, line): (usize, TreatmentLine)| {
        form.update(|f| set_line(f, index, line));
    });
    let on_remove = Callback::new(move |index: usize| form.update(|f| f.remove_item(index)));
    let on_add = Callback::new(move |_| form.update(|f| f.add_item()));
    let summary = move || form.with(|f| total_summary(f.total()));

    view! {
        <DetailsShell
            vm=vm
            title_create="Nuevo presupuesto"
            title_edit="Editar presupuesto"
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

            <TreatmentLinesEditor
                lines=lines
                on_change=on_change
                on_remove=on_remove
                on_add=on_add
            />

            <div class="totals-box">
                <span class="totals-box__label">"TOTAL"</span>
                <span class="totals-box__value">{move || summary().0}</span>
                <span class="totals-box__words">{move || format!("Son: {}", summary().1)}</span>
            </div>

            <TextAreaField label="Nota para el paciente" rows=2
                bind=bind_text(form, |f| f.nota.clone(), |f, v| f.nota = v) />
        </DetailsShell>
    }
}
