//! HTML-документ для печати отчёта.

use super::ReportSpec;
use crate::shared::clinic::{contact_line, CLINIC_NAME, CLINIC_SLOGAN};

const PRINT_CSS: &str = r#"
  @page { size: A4; margin: 14mm; }
  body { font-family: 'Segoe UI', Arial, sans-serif; color: #1f2933; font-size: 11px; }
  .header { display: flex; align-items: center; gap: 14px; border-bottom: 2px solid #0f766e; padding-bottom: 8px; }
  .header img { width: 64px; height: 64px; object-fit: contain; }
  .header h1 { margin: 0; font-size: 18px; color: #0f766e; }
  .header p { margin: 2px 0; color: #52606d; }
  h2 { text-align: center; margin: 16px 0 2px; font-size: 15px; }
  .subtitle { text-align: center; color: #52606d; margin: 0 0 10px; }
  table { width: 100%; border-collapse: collapse; margin-top: 10px; }
  th { background: #0f766e; color: #fff; padding: 6px; font-weight: 600; }
  td { padding: 5px 6px; border-bottom: 1px solid #d9e2ec; }
  tr:nth-child(even) td { background: #f5f7fa; }
  .empty { text-align: center; color: #7b8794; padding: 20px; }
  .footer { margin-top: 16px; font-size: 9px; color: #7b8794; display: flex; justify-content: space-between; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Полный HTML: шапка клиники с логотипом, заголовок, таблица, подвал.
pub fn render(spec: &ReportSpec, logo_url: &str, generated_at: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html lang=\"es\"><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{}</title>", escape_html(&spec.title)));
    html.push_str("<style>");
    html.push_str(PRINT_CSS);
    html.push_str("</style></head><body>");

    html.push_str(&format!(
        "<div class=\"header\"><img src=\"{}\" alt=\"logo\"><div><h1>{}</h1><p>{}</p><p>{}</p></div></div>",
        escape_html(logo_url),
        escape_html(CLINIC_NAME),
        escape_html(CLINIC_SLOGAN),
        escape_html(&contact_line()),
    ));

    html.push_str(&format!("<h2>{}</h2>", escape_html(&spec.title)));
    if let Some(subtitle) = &spec.subtitle {
        html.push_str(&format!("<p class=\"subtitle\">{}</p>", escape_html(subtitle)));
    }

    html.push_str("<table><thead><tr>");
    for column in &spec.columns {
        html.push_str(&format!(
            "<th style=\"text-align:{}\">{}</th>",
            column.align.as_css(),
            escape_html(column.header)
        ));
    }
    html.push_str("</tr></thead><tbody>");

    if spec.rows.is_empty() {
        html.push_str(&format!(
            "<tr><td class=\"empty\" colspan=\"{}\">Sin registros</td></tr>",
            spec.columns.len().max(1)
        ));
    }
    for row in &spec.rows {
        html.push_str("<tr>");
        for (i, cell) in row.iter().enumerate() {
            let align = spec.columns.get(i).map(|c| c.align.as_css()).unwrap_or("left");
            html.push_str(&format!(
                "<td style=\"text-align:{}\">{}</td>",
                align,
                escape_html(cell)
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    html.push_str(&format!(
        "<div class=\"footer\"><span>Total de registros: {}</span><span>Generado: {}</span></div>",
        spec.rows.len(),
        escape_html(generated_at)
    ));
    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::report::ReportColumn;

    fn spec() -> ReportSpec {
        ReportSpec {
            title: "Pacientes".to_string(),
            subtitle: Some("Búsqueda: <vaca>".to_string()),
            columns: vec![ReportColumn::new("Nombre"), ReportColumn::right("Saldo")],
            rows: vec![vec!["Luis & Ana".to_string(), "1.500,00".to_string()]],
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_render_contains_rows_and_escapes() {
        let html = render(&spec(), "/assets/logo.svg", "15/03/2024 10:00");
        assert!(html.contains("<h2>Pacientes</h2>"));
        assert!(html.contains("Búsqueda: &lt;vaca&gt;"));
        assert!(html.contains("<td style=\"text-align:left\">Luis &amp; Ana</td>"));
        assert!(html.contains("<th style=\"text-align:right\">Saldo</th>"));
        assert!(html.contains("Total de registros: 1"));
        assert!(html.contains("src=\"/assets/logo.svg\""));
    }

    #[test]
    fn test_render_empty() {
        let mut s = spec();
        s.rows.clear();
        let html = render(&s, "/assets/logo.svg", "");
        assert!(html.contains("colspan=\"2\">Sin registros"));
    }
}
