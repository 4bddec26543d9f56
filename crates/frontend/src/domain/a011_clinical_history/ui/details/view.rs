use crate::shared::date_utils::today_iso;
use super::view_model::{new_historia_form, HistoriaClinicaDetailsViewModel};
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::entity_select::entity_select;
use crate::shared::components::form_fields::{bind_id, bind_text, TextAreaField, TextField};
use contracts::domain::a001_patient::Paciente;
use contracts::domain::a002_doctor::Doctor;
use contracts::domain::a009_proforma::Proforma;
use contracts::domain::common::display_ref;
use leptos::prelude::*;

#[component]
pub fn HistoriaClinicaDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = HistoriaClinicaDetailsViewModel::with_form(new_historia_form(today_iso()));
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Nueva historia clínica"
            title_edit="Editar historia clínica"
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
                {entity_select::<Proforma>(
                    "Presupuesto",
                    bind_id(form, |f| f.proforma_id, |f, v| f.proforma_id = v),
                    |p| format!("{} · {}", p.numero(), display_ref(&p.paciente)),
                    false,
                )}
                <TextField label="Fecha" input_type="date" required=true
                    bind=bind_text(form, |f| f.fecha.clone(), |f, v| f.fecha = v) />
                <TextField label="Pieza"
                    bind=bind_text(form, |f| f.pieza.clone(), |f, v| f.pieza = v) />
            </div>
            <TextAreaField label="Motivo de consulta" required=true rows=2
                bind=bind_text(form, |f| f.motivo_consulta.clone(), |f, v| f.motivo_consulta = v) />
            <TextAreaField label="Diagnóstico"
                bind=bind_text(form, |f| f.diagnostico.clone(), |f, v| f.diagnostico = v) />
            <TextAreaField label="Tratamiento"
                bind=bind_text(form, |f| f.tratamiento.clone(), |f, v| f.tratamiento = v) />
            <TextAreaField label="Observaciones" rows=2
                bind=bind_text(form, |f| f.observaciones.clone(), |f, v| f.observaciones = v) />
        </DetailsShell>
    }
}
