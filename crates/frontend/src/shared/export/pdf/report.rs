//! Табличный отчёт в PDF: логотип, шапка, заголовок, линия, таблица, подвал.

use super::jspdf::{load_logo_png, JsPdfSurface};
use super::{ensure_space, FontStyle, PdfSurface, TableSpec, TextAlign, BRAND, MARGIN, MUTED, TEXT};
use crate::shared::clinic::{contact_line, CLINIC_NAME, CLINIC_SLOGAN, LOGO_PATH, PRINT_LOGO_TIMEOUT_MS};
use crate::shared::date_utils::{now_label, today};
use crate::shared::export::ReportSpec;

const LOGO_SIZE: f64 = 18.0;

/// Шапка клиники, общая для отчётов и клинических документов; возвращает y под ней
pub fn draw_letterhead<S: PdfSurface>(pdf: &mut S, logo: Option<&str>) -> f64 {
    let (width, _) = pdf.page_size();
    let top = MARGIN;

    let text_x = match logo {
        Some(data) => {
            pdf.image(data, MARGIN, top, LOGO_SIZE, LOGO_SIZE);
            MARGIN + LOGO_SIZE + 4.0
        }
        None => MARGIN,
    };

    pdf.set_text_color(BRAND);
    pdf.set_font(FontStyle::Bold, 16.0);
    pdf.text(CLINIC_NAME, text_x, top + 7.0, TextAlign::Left);
    pdf.set_text_color(MUTED);
    pdf.set_font(FontStyle::Italic, 9.0);
    pdf.text(CLINIC_SLOGAN, text_x, top + 12.0, TextAlign::Left);
    pdf.set_font(FontStyle::Normal, 8.0);
    pdf.text(&contact_line(), text_x, top + 16.5, TextAlign::Left);

    let y = top + LOGO_SIZE + 4.0;
    pdf.set_draw_color(BRAND);
    pdf.set_line_width(0.6);
    pdf.line(MARGIN, y, width - MARGIN, y);
    pdf.set_text_color(TEXT);
    y + 8.0
}

/// "Página i de N" слева и дата генерации справа на каждой странице
pub fn draw_footers<S: PdfSurface>(pdf: &mut S, generated_at: &str) {
    let (width, height) = pdf.page_size();
    let total = pdf.page_count();
    for page in 1..=total {
        pdf.set_page(page);
        pdf.set_font(FontStyle::Normal, 8.0);
        pdf.set_text_color(MUTED);
        pdf.text(&format!("Página {} de {}", page, total), MARGIN, height - 8.0, TextAlign::Left);
        pdf.text(&format!("Generado: {}", generated_at), width - MARGIN, height - 8.0, TextAlign::Right);
    }
}

pub fn draw_report<S: PdfSurface>(pdf: &mut S, spec: &ReportSpec, logo: Option<&str>, generated_at: &str) {
    let (width, _) = pdf.page_size();
    let mut y = draw_letterhead(pdf, logo);

    pdf.set_font(FontStyle::Bold, 14.0);
    pdf.text(&spec.title, width / 2.0, y, TextAlign::Center);
    y += 6.0;
    if let Some(subtitle) = &spec.subtitle {
        pdf.set_font(FontStyle::Normal, 10.0);
        pdf.set_text_color(MUTED);
        pdf.text(subtitle, width / 2.0, y, TextAlign::Center);
        pdf.set_text_color(TEXT);
        y += 6.0;
    }

    let body = if spec.is_empty() {
        let mut empty = vec![String::new(); spec.columns.len().max(1)];
        empty[0] = "Sin registros".to_string();
        vec![empty]
    } else {
        spec.rows.clone()
    };
    let table = TableSpec::new(y, spec.headers(), body)
        .with_aligns(spec.columns.iter().map(|c| c.align).collect())
        .with_weights(spec.columns.iter().map(|c| c.weight).collect());
    let end = pdf.table(&table);
    // итог не должен налезать на подвал
    let end = ensure_space(pdf, end, 12.0);

    pdf.set_font(FontStyle::Bold, 9.0);
    pdf.text(
        &format!("Total de registros: {}", spec.rows.len()),
        MARGIN,
        end + 7.0,
        TextAlign::Left,
    );

    draw_footers(pdf, generated_at);
}

async fn build(spec: &ReportSpec) -> JsPdfSurface {
    let logo = load_logo_png(LOGO_PATH, 256, PRINT_LOGO_TIMEOUT_MS).await;
    let mut pdf = JsPdfSurface::a4();
    draw_report(&mut pdf, spec, logo.as_deref(), &now_label());
    pdf
}

/// Скачать отчёт как `<titulo>_<fecha>.pdf`
pub async fn export_pdf(spec: &ReportSpec) -> Result<(), String> {
    let pdf = build(spec).await;
    pdf.save(&spec.file_name("pdf", today()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::recording::{Op, RecordingSurface};
    use super::*;
    use contracts::shared::report::ReportColumn;

    fn spec(rows: usize) -> ReportSpec {
        ReportSpec {
            title: "Pacientes".to_string(),
            subtitle: Some("Activos".to_string()),
            columns: vec![ReportColumn::new("Nombre").weighted(2.0), ReportColumn::right("Saldo")],
            rows: (0..rows).map(|i| vec![format!("P{}", i), "10,00".to_string()]).collect(),
        }
    }

    #[test]
    fn test_report_layout() {
        let mut pdf = RecordingSurface::new();
        draw_report(&mut pdf, &spec(3), Some("data:image/png;base64,x"), "15/03/2024 10:00");

        assert_eq!(pdf.count(|op| matches!(op, Op::Image)), 1);
        assert!(pdf.has_text(CLINIC_NAME));
        assert!(pdf.has_text("Pacientes"));
        assert!(pdf.has_text("Activos"));
        assert!(pdf.has_text("Total de registros: 3"));
        assert!(pdf.has_text("Página 1 de 1"));
        assert!(pdf.has_text("Generado: 15/03/2024 10:00"));
        // линия под шапкой
        assert!(pdf.count(|op| matches!(op, Op::Line)) >= 1);

        let tables = pdf.tables();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].head, vec!["Nombre", "Saldo"]);
        assert_eq!(tables[0].body.len(), 3);
        assert_eq!(tables[0].weights, vec![2.0, 0.0]);
    }

    #[test]
    fn test_empty_report_has_placeholder_row() {
        let mut pdf = RecordingSurface::new();
        draw_report(&mut pdf, &spec(0), None, "x");
        let table = &pdf.tables()[0];
        assert_eq!(table.body, vec![vec!["Sin registros".to_string(), String::new()]]);
        assert!(pdf.has_text("Total de registros: 0"));
        assert_eq!(pdf.count(|op| matches!(op, Op::Image)), 0);
    }

    #[test]
    fn test_total_moves_to_next_page_near_bottom() {
        let mut pdf = RecordingSurface::new();
        // таблица заканчивается у нижнего поля первой страницы
        draw_report(&mut pdf, &spec(30), None, "x");
        let (_, height) = pdf.page_size();
        let total = pdf
            .ops
            .iter()
            .find_map(|op| match op {
                Op::Text { text, y, page, .. } if text.starts_with("Total de registros") => Some((*y, *page)),
                _ => None,
            })
            .unwrap();
        assert_eq!(total, (MARGIN + 12.0, 2));
        assert!(total.0 < height - 8.0);
        assert!(pdf.has_text("Página 2 de 2"));
    }

    #[test]
    fn test_footer_on_every_page() {
        let mut pdf = RecordingSurface::new();
        pdf.add_page();
        draw_footers(&mut pdf, "x");
        let footers: Vec<usize> = pdf
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, page, .. } if text.starts_with("Página") => Some(*page),
                _ => None,
            })
            .collect();
        assert_eq!(footers, vec![1, 2]);
        assert!(pdf.has_text("Página 2 de 2"));
    }
}
