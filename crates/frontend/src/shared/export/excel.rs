//! Экспорт в `.xlsx` через SheetJS (`XLSX` из index.html).

use super::ReportSpec;
use crate::shared::date_utils::today;
use contracts::shared::money::parse_money;
use contracts::shared::report::ColumnAlign;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["XLSX", "utils"], js_name = aoa_to_sheet, catch)]
    fn aoa_to_sheet(data: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["XLSX", "utils"], js_name = book_new)]
    fn book_new() -> JsValue;

    #[wasm_bindgen(js_namespace = ["XLSX", "utils"], js_name = book_append_sheet, catch)]
    fn book_append_sheet(workbook: &JsValue, sheet: &JsValue, name: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = XLSX, js_name = writeFile, catch)]
    fn write_file(workbook: &JsValue, filename: &str) -> Result<(), JsValue>;
}

const MAX_COLUMN_WIDTH: usize = 50;
/// Excel не принимает имена листов длиннее 31 символа
const MAX_SHEET_NAME: usize = 31;

/// Числа вида `1.234,56` или `2,5` в правых колонках уходят числом, остальное текстом
pub fn excel_cell(text: &str, align: ColumnAlign) -> Value {
    if align == ColumnAlign::Right {
        if let Some(n) = parse_money(text) {
            return serde_json::json!(n);
        }
    }
    Value::String(text.to_string())
}

/// Заголовок + строки в виде массива массивов для `aoa_to_sheet`
pub fn sheet_rows(spec: &ReportSpec) -> Vec<Vec<Value>> {
    let mut rows = Vec::with_capacity(spec.rows.len() + 1);
    rows.push(spec.headers().into_iter().map(Value::String).collect());
    for row in &spec.rows {
        rows.push(
            row.iter()
                .enumerate()
                .map(|(i, cell)| {
                    let align = spec.columns.get(i).map(|c| c.align).unwrap_or_default();
                    excel_cell(cell, align)
                })
                .collect(),
        );
    }
    rows
}

/// Ширина колонки в символах по самой длинной ячейке
pub fn column_widths(spec: &ReportSpec) -> Vec<usize> {
    spec.columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let longest = spec
                .rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(10);
            (longest + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}

#[derive(Serialize)]
struct ColWidth {
    wch: usize,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Failed to convert data: {}", e))
}

pub fn export_excel(spec: &ReportSpec) -> Result<(), String> {
    let data = to_js(&sheet_rows(spec))?;
    let sheet = aoa_to_sheet(&data).map_err(|e| format!("aoa_to_sheet failed: {:?}", e))?;

    let widths: Vec<ColWidth> = column_widths(spec)
        .into_iter()
        .map(|wch| ColWidth { wch })
        .collect();
    js_sys::Reflect::set(&sheet, &JsValue::from_str("!cols"), &to_js(&widths)?)
        .map_err(|e| format!("Failed to set column widths: {:?}", e))?;

    let workbook = book_new();
    let sheet_name: String = spec.title.chars().take(MAX_SHEET_NAME).collect();
    book_append_sheet(&workbook, &sheet, &sheet_name)
        .map_err(|e| format!("book_append_sheet failed: {:?}", e))?;

    write_file(&workbook, &spec.file_name("xlsx", today()))
        .map_err(|e| format!("writeFile failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report::ReportColumn;

    fn spec() -> ReportSpec {
        ReportSpec {
            title: "Pagos".to_string(),
            subtitle: None,
            columns: vec![ReportColumn::new("Paciente"), ReportColumn::right("Monto")],
            rows: vec![
                vec!["Luis Vaca".to_string(), "1.500,50".to_string()],
                vec!["Ana".to_string(), "-".to_string()],
            ],
        }
    }

    #[test]
    fn test_money_cells_become_numbers() {
        assert_eq!(excel_cell("1.500,50", ColumnAlign::Right), serde_json::json!(1500.5));
        assert_eq!(excel_cell("Bs. 20,00", ColumnAlign::Right), serde_json::json!(20.0));
        assert_eq!(excel_cell("-", ColumnAlign::Right), serde_json::json!("-"));
        assert_eq!(excel_cell("123", ColumnAlign::Left), serde_json::json!("123"));
    }

    #[test]
    fn test_fractional_quantity_cells() {
        assert_eq!(excel_cell("2,5", ColumnAlign::Right), serde_json::json!(2.5));
        // неоднозначная запись остаётся текстом, а не превращается в 25
        assert_eq!(excel_cell("2.5", ColumnAlign::Right), serde_json::json!("2.5"));
    }

    #[test]
    fn test_sheet_rows_has_header() {
        let rows = sheet_rows(&spec());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][1], serde_json::json!("Monto"));
        assert_eq!(rows[1][1], serde_json::json!(1500.5));
    }

    #[test]
    fn test_column_widths() {
        assert_eq!(column_widths(&spec()), vec![11, 10]);
    }
}
