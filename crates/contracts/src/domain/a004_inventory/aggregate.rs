use crate::domain::common::{clearable_text, Clearable, Estado, Resource};
use crate::shared::date_format::{format_date, input_date};
use crate::shared::money::{format_money, format_quantity};
use crate::shared::report::{ReportColumn, ReportRow};
use serde::{Deserialize, Serialize};

/// Позиция склада: материалы и расходники
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInventario {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub unidad: String,
    #[serde(default)]
    pub cantidad: f64,
    #[serde(default)]
    pub stock_minimo: f64,
    #[serde(default)]
    pub precio_unitario: f64,
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,
    #[serde(default)]
    pub estado: Estado,
}

impl ItemInventario {
    /// Остаток на уровне минимума или ниже
    pub fn is_low_stock(&self) -> bool {
        self.cantidad <= self.stock_minimo
    }
}

impl Resource for ItemInventario {
    const PATH: &'static str = "/inventario";
    const KEY: &'static str = "a004_inventory";
    const TITLE: &'static str = "Inventario";

    fn id(&self) -> i64 {
        self.id
    }

    fn estado(&self) -> Option<Estado> {
        Some(self.estado)
    }
}

impl ReportRow for ItemInventario {
    fn report_columns() -> Vec<ReportColumn> {
        vec![
            ReportColumn::new("Producto").weighted(2.0),
            ReportColumn::new("Categoría"),
            ReportColumn::right("Cantidad"),
            ReportColumn::right("Stock mín."),
            ReportColumn::new("Unidad"),
            ReportColumn::right("P. Unitario"),
            ReportColumn::center("Vencimiento"),
        ]
    }

    fn report_cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.categoria.clone(),
            format_quantity(self.cantidad),
            format_quantity(self.stock_minimo),
            self.unidad.clone(),
            format_money(self.precio_unitario),
            self.fecha_vencimiento
                .as_deref()
                .map(format_date)
                .unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInventarioDto {
    pub nombre: String,
    pub categoria: String,
    pub unidad: String,
    pub cantidad: f64,
    pub stock_minimo: f64,
    pub precio_unitario: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_vencimiento: Clearable<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemInventarioForm {
    pub id: Option<i64>,
    pub nombre: String,
    pub categoria: String,
    pub unidad: String,
    pub cantidad: f64,
    pub stock_minimo: f64,
    pub precio_unitario: f64,
    pub fecha_vencimiento: String,
}

impl ItemInventarioForm {
    pub fn from_entity(i: &ItemInventario) -> Self {
        Self {
            id: Some(i.id),
            nombre: i.nombre.clone(),
            categoria: i.categoria.clone(),
            unidad: i.unidad.clone(),
            cantidad: i.cantidad,
            stock_minimo: i.stock_minimo,
            precio_unitario: i.precio_unitario,
            fecha_vencimiento: i
                .fecha_vencimiento
                .as_deref()
                .map(input_date)
                .unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> ItemInventarioDto {
        let editing = self.id.is_some();
        ItemInventarioDto {
            nombre: self.nombre.trim().to_string(),
            categoria: self.categoria.trim().to_string(),
            unidad: self.unidad.trim().to_string(),
            cantidad: self.cantidad,
            stock_minimo: self.stock_minimo,
            precio_unitario: self.precio_unitario,
            fecha_vencimiento: clearable_text(&self.fecha_vencimiento, editing),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre del producto es obligatorio");
        }
        if self.cantidad < 0.0 || self.stock_minimo < 0.0 || self.precio_unitario < 0.0 {
            return Err("Las cantidades y precios no pueden ser negativos");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock() {
        let mut item: ItemInventario = serde_json::from_value(serde_json::json!({
            "id": 1, "nombre": "Resina", "cantidad": 3, "stockMinimo": 5
        }))
        .unwrap();
        assert!(item.is_low_stock());
        item.cantidad = 6.0;
        assert!(!item.is_low_stock());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let form = ItemInventarioForm {
            nombre: "Guantes".into(),
            cantidad: -1.0,
            ..Default::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_report_cells_keep_fractional_quantity() {
        let item: ItemInventario = serde_json::from_value(serde_json::json!({
            "id": 2, "nombre": "Alginato", "cantidad": 2.5, "stockMinimo": 1
        }))
        .unwrap();
        let cells = item.report_cells();
        assert_eq!(cells[2], "2,5");
        assert_eq!(cells[3], "1");
    }
}
