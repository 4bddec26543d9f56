use crate::domain::a004_inventory::ui::details::ItemInventarioDetails;
use crate::shared::components::estado_badge::Badge;
use crate::shared::list_controller::ListController;
use crate::shared::resource_list::{resource_list, ListScreen};
use contracts::domain::a004_inventory::ItemInventario;
use leptos::prelude::*;

fn item_form(id: Option<i64>, on_saved: Callback<()>, on_cancel: Callback<()>) -> AnyView {
    view! { <ItemInventarioDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
}

/// Метка «Stock bajo» рядом с действиями строки
fn low_stock_badge(_ctrl: ListController<ItemInventario>, item: &ItemInventario) -> AnyView {
    if item.is_low_stock() {
        view! { <Badge text="Stock bajo" variant="warning" /> }.into_any()
    } else {
        ().into_any()
    }
}

#[component]
pub fn InventarioList() -> impl IntoView {
    resource_list(
        ListScreen::<ItemInventario>::new("a004_inventory--list", |i| i.nombre.clone())
            .with_form(item_form)
            .with_placeholder("Buscar producto o categoría...")
            .with_row_extras(low_stock_badge),
    )
}
