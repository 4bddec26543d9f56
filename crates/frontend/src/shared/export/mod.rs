//! Один сервис отчётов для всех экранов: печать, PDF и Excel
//! строятся из одной схемы колонок и матрицы ячеек.

pub mod excel;
pub mod pdf;
pub mod print;
pub mod print_template;
pub mod whatsapp;

use chrono::NaiveDate;
use contracts::shared::report::{report_matrix, ReportColumn, ReportRow};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

/// Табличный отчёт: заголовок, колонки и уже отформатированные ячейки
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSpec {
    pub title: String,
    pub subtitle: Option<String>,
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSpec {
    pub fn from_rows<R: ReportRow>(title: &str, rows: &[R]) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            columns: R::report_columns(),
            rows: report_matrix(rows),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Pacientes` → `pacientes_2024-03-15.pdf`
    pub fn file_name(&self, extension: &str, date: NaiveDate) -> String {
        format!("{}_{}.{}", slug(&self.title), date.format("%Y-%m-%d"), extension)
    }
}

/// Куда выгружается отчёт
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Print,
    Pdf,
    Excel,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Print => "Imprimir",
            ExportKind::Pdf => "PDF",
            ExportKind::Excel => "Excel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ExportKind::Print => "printer",
            ExportKind::Pdf => "file-pdf",
            ExportKind::Excel => "excel",
        }
    }
}

/// Один вход для всех трёх форматов
pub async fn run_export(kind: ExportKind, spec: &ReportSpec) -> Result<(), String> {
    log::debug!("export {:?}: {} ({} rows)", kind, spec.title, spec.rows.len());
    match kind {
        ExportKind::Print => print::print_report(spec),
        ExportKind::Pdf => pdf::report::export_pdf(spec).await,
        ExportKind::Excel => excel::export_excel(spec),
    }
}

/// Имя файла без пробелов и диакритики
pub fn slug(text: &str) -> String {
    let mut out = String::new();
    for ch in text.trim().to_lowercase().chars() {
        let mapped = match ch {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            'ñ' => 'n',
            c if c.is_ascii_alphanumeric() => c,
            _ => '_',
        };
        if mapped == '_' && (out.is_empty() || out.ends_with('_')) {
            continue;
        }
        out.push(mapped);
    }
    let trimmed = out.trim_end_matches('_').to_string();
    if trimmed.is_empty() {
        "reporte".to_string()
    } else {
        trimmed
    }
}

/// Скачивание Blob через временную ссылку
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report::ColumnAlign;

    struct Row(&'static str, f64);

    impl ReportRow for Row {
        fn report_columns() -> Vec<ReportColumn> {
            vec![ReportColumn::new("Nombre"), ReportColumn::right("Monto")]
        }

        fn report_cells(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn test_spec_from_rows() {
        let spec = ReportSpec::from_rows("Pagos", &[Row("Ana", 10.0), Row("Luis", 2.5)]);
        assert_eq!(spec.headers(), vec!["Nombre", "Monto"]);
        assert_eq!(spec.rows[1], vec!["Luis", "2.50"]);
        assert_eq!(spec.columns[1].align, ColumnAlign::Right);
    }

    #[test]
    fn test_file_name() {
        let spec = ReportSpec::from_rows::<Row>("Historia clínica", &[]);
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(spec.file_name("pdf", date), "historia_clinica_2024-03-15.pdf");
        assert!(spec.is_empty());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Formas de pago"), "formas_de_pago");
        assert_eq!(slug("  Año / Señal  "), "ano_senal");
        assert_eq!(slug("***"), "reporte");
    }
}
