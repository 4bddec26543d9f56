use super::view_model::{estado_trabajo_options, TrabajoLaboratorioDetailsViewModel};
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::entity_select::entity_select;
use crate::shared::components::form_fields::{
    bind_id, bind_number, bind_text, NumberField, SelectField, TextAreaField, TextField,
};
use contracts::domain::a001_patient::Paciente;
use contracts::domain::a002_doctor::Doctor;
use contracts::domain::a005_laboratory::Laboratorio;
use contracts::domain::a006_laboratory_work::EstadoTrabajo;
use leptos::prelude::*;

#[component]
pub fn TrabajoLaboratorioDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = TrabajoLaboratorioDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Nuevo trabajo de laboratorio"
            title_edit="Editar trabajo de laboratorio"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <div class="form__grid">
                {entity_select::<Laboratorio>(
                    "Laboratorio",
                    bind_id(form, |f| f.laboratorio_id, |f, v| f.laboratorio_id = v),
                    |l| l.nombre.clone(),
                    true,
                )}
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
                <TextField label="Pieza" placeholder="Ej. 16"
                    bind=bind_text(form, |f| f.pieza.clone(), |f, v| f.pieza = v) />
                <TextField label="Fecha de envío" input_type="date"
                    bind=bind_text(form, |f| f.fecha_envio.clone(), |f, v| f.fecha_envio = v) />
                <TextField label="Fecha de entrega" input_type="date"
                    bind=bind_text(form, |f| f.fecha_entrega.clone(), |f, v| f.fecha_entrega = v) />
                <NumberField label="Costo (Bs.)"
                    bind=bind_number(form, |f| f.costo, |f, v| f.costo = v) />
                <SelectField
                    label="Estado del trabajo"
                    options=estado_trabajo_options()
                    bind=bind_text(
                        form,
                        |f| f.estado_trabajo.code().to_string(),
                        |f, v| f.estado_trabajo = EstadoTrabajo::from_code(&v),
                    )
                />
            </div>
            <TextAreaField label="Descripción del trabajo" required=true
                bind=bind_text(form, |f| f.descripcion.clone(), |f, v| f.descripcion = v) />
        </DetailsShell>
    }
}
