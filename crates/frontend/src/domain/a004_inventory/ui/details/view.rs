use super::view_model::ItemInventarioDetailsViewModel;
use crate::shared::components::details_shell::DetailsShell;
use crate::shared::components::form_fields::{bind_number, bind_text, NumberField, TextField};
use leptos::prelude::*;

#[component]
pub fn ItemInventarioDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ItemInventarioDetailsViewModel::new();
    vm.load_if_needed(id);
    let form = vm.form;

    // Подсказка прямо в форме, пока пользователь правит остаток
    let low_stock = move || form.with(|f| f.stock_minimo > 0.0 && f.cantidad <= f.stock_minimo);

    view! {
        <DetailsShell
            vm=vm
            title_create="Nuevo producto"
            title_edit="Editar producto"
            on_saved=on_saved
            on_cancel=on_cancel
        >
            <div class="form__grid">
                <TextField label="Producto" required=true
                    bind=bind_text(form, |f| f.nombre.clone(), |f, v| f.nombre = v) />
                <TextField label="Categoría" placeholder="Material, instrumental..."
                    bind=bind_text(form, |f| f.categoria.clone(), |f, v| f.categoria = v) />
                <TextField label="Unidad" placeholder="caja, unidad, ml..."
                    bind=bind_text(form, |f| f.unidad.clone(), |f, v| f.unidad = v) />
                <NumberField label="Cantidad" step="1"
                    bind=bind_number(form, |f| f.cantidad, |f, v| f.cantidad = v) />
                <NumberField label="Stock mínimo" step="1"
                    bind=bind_number(form, |f| f.stock_minimo, |f, v| f.stock_minimo = v) />
                <NumberField label="Precio unitario (Bs.)"
                    bind=bind_number(form, |f| f.precio_unitario, |f, v| f.precio_unitario = v) />
                <TextField label="Fecha de vencimiento" input_type="date"
                    bind=bind_text(form, |f| f.fecha_vencimiento.clone(), |f, v| f.fecha_vencimiento = v) />
            </div>
            <Show when=low_stock>
                <div class="details__warning">"La cantidad está en el nivel mínimo de stock o por debajo."</div>
            </Show>
        </DetailsShell>
    }
}
