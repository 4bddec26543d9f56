use crate::shared::date_utils::today_iso;
use super::view_model::{new_pago_form, PagoDetailsViewModel};
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::entity_select::entity_select;
use crate::shared::components::form_fields::{
    bind_id, bind_number, bind_text, NumberField, TextField,
};
use contracts::domain::a001_patient::Paciente;
use contracts::domain::a007_payment_method::FormaPago;
use contracts::domain::a009_proforma::Proforma;
use contracts::domain::common::display_ref;
use leptos::prelude::*;

fn proforma_option(p: &Proforma) -> String {
    format!("{} · {}", p.numero(), display_ref(&p.paciente))
}

#[component]
pub fn PagoDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PagoDetailsViewModel::with_form(new_pago_form(today_iso()));
    vm.load_if_needed(id);
    let form = vm.form;

    view! {
        <DetailsShell
            vm=vm
            title_create="Registrar pago"
            title_edit="Editar pago"
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
                {entity_select::<FormaPago>(
                    "Forma de pago",
                    bind_id(form, |f| f.forma_pago_id, |f, v| f.forma_pago_id = v),
                    |f| f.nombre.clone(),
                    true,
                )}
                {entity_select::<Proforma>(
                    "Presupuesto",
                    bind_id(form, |f| f.proforma_id, |f, v| f.proforma_id = v),
                    proforma_option,
                    false,
                )}
                <NumberField label="Monto (Bs.)" required=true
                    bind=bind_number(form, |f| f.monto, |f, v| f.monto = v) />
                <TextField label="Fecha" input_type="date" required=true
                    bind=bind_text(form, |f| f.fecha.clone(), |f, v| f.fecha = v) />
                <TextField label="Concepto"
                    bind=bind_text(form, |f| f.concepto.clone(), |f, v| f.concepto = v) />
            </div>
        </DetailsShell>
    }
}
