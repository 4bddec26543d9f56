//! Клинический документ (presupuesto / propuesta) на A4.
//!
//! Фиксированная раскладка: шапка, обращение к пациенту, таблица лечения
//! по каждому варианту, блок итога с суммой прописью, условия оплаты,
//! оговорка об ответственности и подписи.

use super::jspdf::{load_logo_png, JsPdfSurface};
use super::report::{draw_footers, draw_letterhead};
use super::{
    ensure_space, paragraph, FontStyle, Paint, PdfSurface, TableSpec, TextAlign, BRAND, BRAND_LIGHT,
    MARGIN, MUTED, TEXT, WHITE,
};
use crate::shared::clinic::{CLINIC_NAME, LOGO_PATH, PRINT_LOGO_TIMEOUT_MS};
use crate::shared::date_utils::now_label;
use crate::shared::export::slug;
use contracts::domain::a009_proforma::Proforma;
use contracts::domain::a010_proposal::Propuesta;
use contracts::domain::common::{any_discount, display_ref, lines_total, TreatmentLine};
use contracts::shared::amount_in_words::amount_in_words;
use contracts::shared::date_format::long_date_str;
use contracts::shared::money::{format_bs, format_money};
use contracts::shared::report::ColumnAlign;
use web_sys::Blob;

pub const PAYMENT_TERMS: &str = "Forma de pago: 50% al inicio del tratamiento y el saldo en cuotas \
acordadas con el profesional tratante, antes de concluir el tratamiento. Los precios están \
expresados en bolivianos y tienen una validez de 30 días a partir de la fecha de emisión.";

pub const DISCLAIMER: &str = "El presente documento es un presupuesto estimado. El plan de \
tratamiento puede modificarse según la evolución clínica del paciente. La clínica no se \
responsabiliza por complicaciones derivadas del incumplimiento de las indicaciones o de la \
inasistencia a los controles programados.";

/// Какой документ печатаем
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Presupuesto,
    Propuesta,
}

impl DocumentKind {
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Presupuesto => "PRESUPUESTO",
            DocumentKind::Propuesta => "PROPUESTA DE TRATAMIENTO",
        }
    }
}

/// Группа строк со своим итогом (у проформы одна, у предложения по варианту)
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalSection {
    pub title: Option<String>,
    pub lines: Vec<TreatmentLine>,
}

impl ClinicalSection {
    pub fn total(&self) -> f64 {
        lines_total(&self.lines)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalDocument {
    pub kind: DocumentKind,
    pub numero: String,
    /// "15 de marzo de 2024", пусто если даты нет
    pub fecha: String,
    pub paciente: String,
    pub doctor: String,
    pub nota: Option<String>,
    pub sections: Vec<ClinicalSection>,
}

impl ClinicalDocument {
    pub fn from_proforma(p: &Proforma) -> Self {
        Self {
            kind: DocumentKind::Presupuesto,
            numero: p.numero(),
            fecha: p.fecha.as_deref().map(long_date_str).unwrap_or_default(),
            paciente: display_ref(&p.paciente),
            doctor: display_ref(&p.doctor),
            nota: p.nota.clone().filter(|n| !n.trim().is_empty()),
            sections: vec![ClinicalSection {
                title: None,
                lines: p.items.iter().filter(|l| !l.is_blank()).cloned().collect(),
            }],
        }
    }

    pub fn from_propuesta(p: &Propuesta) -> Self {
        Self {
            kind: DocumentKind::Propuesta,
            numero: p.numero(),
            fecha: p.fecha.as_deref().map(long_date_str).unwrap_or_default(),
            paciente: display_ref(&p.paciente),
            doctor: display_ref(&p.doctor),
            nota: p.descripcion.clone().filter(|n| !n.trim().is_empty()),
            sections: p
                .options()
                .into_iter()
                .map(|v| ClinicalSection {
                    title: Some(v.label()),
                    lines: p.lines_for(v).into_iter().filter(|l| !l.is_blank()).collect(),
                })
                .collect(),
        }
    }

    /// `presupuesto_P-00012.pdf`
    pub fn file_name(&self) -> String {
        format!("{}_{}.pdf", slug(self.kind.title()), self.numero)
    }

    /// Текст сообщения, с которым PDF уходит пациенту
    pub fn whatsapp_message(&self) -> String {
        let what = match self.kind {
            DocumentKind::Presupuesto => "su presupuesto",
            DocumentKind::Propuesta => "su propuesta de tratamiento",
        };
        format!("Hola {}, le enviamos {} {} de {}.", self.paciente, what, self.numero, CLINIC_NAME)
    }
}

fn table_for(section: &ClinicalSection, y: f64) -> TableSpec {
    let discount = any_discount(&section.lines);
    let mut head = vec!["Tratamiento", "Pieza", "Cant.", "P. Unit. (Bs.)"];
    let mut aligns = vec![ColumnAlign::Left, ColumnAlign::Center, ColumnAlign::Center, ColumnAlign::Right];
    let mut weights = vec![4.0, 1.2, 1.0, 1.8];
    if discount {
        head.extend(["Desc. %", "Desc. (Bs.)"]);
        aligns.extend([ColumnAlign::Center, ColumnAlign::Right]);
        weights.extend([1.2, 1.6]);
    }
    head.push("Total (Bs.)");
    aligns.push(ColumnAlign::Right);
    weights.push(1.8);

    TableSpec::new(
        y,
        head.into_iter().map(String::from).collect(),
        section.lines.iter().map(|l| l.cells(discount)).collect(),
    )
    .with_aligns(aligns)
    .with_weights(weights)
}

/// Зуб из примитивов: коронка эллипсом, два корня линиями
pub fn draw_tooth<S: PdfSurface>(pdf: &mut S, x: f64, y: f64, size: f64) {
    let half = size / 2.0;
    pdf.set_draw_color(BRAND);
    pdf.set_fill_color(WHITE);
    pdf.set_line_width(0.5);
    pdf.rounded_rect(x - half, y - half * 0.6, size, half * 1.1, half * 0.45, Paint::FillStroke);
    pdf.ellipse(x - half * 0.45, y - half * 0.55, half * 0.5, half * 0.3, Paint::FillStroke);
    pdf.ellipse(x + half * 0.45, y - half * 0.55, half * 0.5, half * 0.3, Paint::FillStroke);
    let root_top = y + half * 0.5;
    pdf.line(x - half * 0.6, root_top, x - half * 0.35, y + size);
    pdf.line(x - half * 0.35, y + size, x - half * 0.05, root_top + half * 0.2);
    pdf.line(x + half * 0.05, root_top + half * 0.2, x + half * 0.35, y + size);
    pdf.line(x + half * 0.35, y + size, x + half * 0.6, root_top);
}

/// Блок итога; возвращает y под ним
fn draw_totals_box<S: PdfSurface>(pdf: &mut S, total: f64, y: f64) -> f64 {
    let (width, _) = pdf.page_size();
    let box_w = width - 2.0 * MARGIN;
    let box_h = 18.0;
    let y = ensure_space(pdf, y, box_h + 4.0);

    pdf.set_fill_color(BRAND_LIGHT);
    pdf.set_draw_color(BRAND);
    pdf.set_line_width(0.4);
    pdf.rounded_rect(MARGIN, y, box_w, box_h, 2.0, Paint::FillStroke);
    draw_tooth(pdf, MARGIN + 9.0, y + box_h / 2.0 - 1.5, 9.0);

    pdf.set_text_color(BRAND);
    pdf.set_font(FontStyle::Bold, 12.0);
    pdf.text(&format!("TOTAL: {}", format_bs(total)), width - MARGIN - 4.0, y + 7.0, TextAlign::Right);
    pdf.set_text_color(TEXT);
    pdf.set_font(FontStyle::Italic, 8.5);
    pdf.text(
        &format!("Son: {}", amount_in_words(total)),
        width - MARGIN - 4.0,
        y + 13.5,
        TextAlign::Right,
    );
    y + box_h + 6.0
}

fn draw_signatures<S: PdfSurface>(pdf: &mut S, doctor: &str, y: f64) -> f64 {
    let (width, _) = pdf.page_size();
    let y = ensure_space(pdf, y, 30.0) + 18.0;
    let col = (width - 2.0 * MARGIN) / 2.0;
    let line_w = 60.0;

    pdf.set_draw_color(TEXT);
    pdf.set_line_width(0.3);
    for (i, (label, name)) in [("Firma del paciente", ""), ("Profesional tratante", doctor)]
        .into_iter()
        .enumerate()
    {
        let center = MARGIN + col * i as f64 + col / 2.0;
        pdf.line(center - line_w / 2.0, y, center + line_w / 2.0, y);
        pdf.set_font(FontStyle::Bold, 9.0);
        pdf.text(label, center, y + 5.0, TextAlign::Center);
        if !name.is_empty() && name != "-" {
            pdf.set_font(FontStyle::Normal, 8.5);
            pdf.text(name, center, y + 9.5, TextAlign::Center);
        }
    }
    y + 14.0
}

pub fn draw_clinical<S: PdfSurface>(pdf: &mut S, doc: &ClinicalDocument, logo: Option<&str>, generated_at: &str) {
    let (width, _) = pdf.page_size();
    let text_width = width - 2.0 * MARGIN;
    let mut y = draw_letterhead(pdf, logo);

    pdf.set_font(FontStyle::Bold, 14.0);
    pdf.set_text_color(BRAND);
    pdf.text(doc.kind.title(), width / 2.0, y, TextAlign::Center);
    pdf.set_font(FontStyle::Normal, 10.0);
    pdf.set_text_color(MUTED);
    pdf.text(&format!("N° {}", doc.numero), width / 2.0, y + 5.5, TextAlign::Center);
    y += 13.0;

    pdf.set_text_color(TEXT);
    pdf.set_font(FontStyle::Normal, 10.0);
    if !doc.fecha.is_empty() {
        pdf.text(&format!("Cochabamba, {}", doc.fecha), width - MARGIN, y, TextAlign::Right);
    }
    pdf.set_font(FontStyle::Bold, 10.0);
    pdf.text(&format!("Paciente: {}", doc.paciente), MARGIN, y, TextAlign::Left);
    y += 5.5;
    pdf.set_font(FontStyle::Normal, 10.0);
    pdf.text(&format!("Doctor(a): {}", doc.doctor), MARGIN, y, TextAlign::Left);
    y += 9.0;

    pdf.text(&format!("Estimado(a) {}:", doc.paciente), MARGIN, y, TextAlign::Left);
    y += 6.0;
    let intro = match doc.kind {
        DocumentKind::Presupuesto => {
            "Por medio de la presente le hacemos llegar el detalle del tratamiento odontológico \
             recomendado y su costo."
        }
        DocumentKind::Propuesta => {
            "Por medio de la presente le presentamos las opciones de tratamiento odontológico \
             evaluadas para su caso, para que pueda elegir la que mejor se adapte a sus necesidades."
        }
    };
    y = paragraph(pdf, intro, MARGIN, y, text_width, 5.0) + 3.0;

    if let Some(nota) = &doc.nota {
        pdf.set_font(FontStyle::Italic, 9.5);
        y = paragraph(pdf, nota, MARGIN, y, text_width, 5.0) + 3.0;
        pdf.set_font(FontStyle::Normal, 10.0);
    }

    for section in &doc.sections {
        if let Some(title) = &section.title {
            y = ensure_space(pdf, y, 25.0);
            pdf.set_font(FontStyle::Bold, 11.0);
            pdf.set_text_color(BRAND);
            pdf.text(title, MARGIN, y, TextAlign::Left);
            pdf.set_text_color(TEXT);
            y += 3.0;
        }
        y = pdf.table(&table_for(section, y)) + 5.0;
        y = draw_totals_box(pdf, section.total(), y);
    }

    if doc.sections.len() > 1 {
        y = ensure_space(pdf, y, 30.0);
        pdf.set_font(FontStyle::Bold, 11.0);
        pdf.text("Resumen de opciones", MARGIN, y, TextAlign::Left);
        let summary = TableSpec::new(
            y + 3.0,
            vec!["Opción".to_string(), "Total (Bs.)".to_string()],
            doc.sections
                .iter()
                .map(|s| vec![s.title.clone().unwrap_or_default(), format_money(s.total())])
                .collect(),
        )
        .with_aligns(vec![ColumnAlign::Left, ColumnAlign::Right]);
        y = pdf.table(&summary) + 8.0;
    }

    y = ensure_space(pdf, y, 40.0);
    pdf.set_font(FontStyle::Bold, 10.0);
    pdf.text("Condiciones de pago", MARGIN, y, TextAlign::Left);
    pdf.set_font(FontStyle::Normal, 9.0);
    y = paragraph(pdf, PAYMENT_TERMS, MARGIN, y + 5.0, text_width, 4.5) + 4.0;

    pdf.set_font(FontStyle::Italic, 8.0);
    pdf.set_text_color(MUTED);
    y = paragraph(pdf, DISCLAIMER, MARGIN, y, text_width, 4.0) + 4.0;
    pdf.set_text_color(TEXT);

    draw_signatures(pdf, &doc.doctor, y);
    draw_footers(pdf, generated_at);
}

async fn build(doc: &ClinicalDocument) -> JsPdfSurface {
    let logo = load_logo_png(LOGO_PATH, 256, PRINT_LOGO_TIMEOUT_MS).await;
    let mut pdf = JsPdfSurface::a4();
    draw_clinical(&mut pdf, doc, logo.as_deref(), &now_label());
    pdf
}

pub async fn download_clinical(doc: &ClinicalDocument) -> Result<(), String> {
    let pdf = build(doc).await;
    pdf.save(&doc.file_name());
    Ok(())
}

pub async fn clinical_pdf_blob(doc: &ClinicalDocument) -> Result<Blob, String> {
    build(doc).await.blob()
}

#[cfg(test)]
mod tests {
    use super::super::recording::{Op, RecordingSurface};
    use super::*;

    fn proforma(items: serde_json::Value) -> Proforma {
        serde_json::from_value(serde_json::json!({
            "id": 12,
            "paciente": { "id": 1, "nombre": "Ana", "apellido": "Rojas" },
            "doctor": { "id": 2, "nombre": "Luis", "apellido": "Vargas" },
            "fecha": "2024-03-15",
            "items": items
        }))
        .unwrap()
    }

    #[test]
    fn test_totals_box_equals_sum_of_lines() {
        let p = proforma(serde_json::json!([
            { "tratamiento": "Corona", "cantidad": 1, "precioUnitario": 1000 },
            { "tratamiento": "Resina", "cantidad": 2, "precioUnitario": 117.28 }
        ]));
        let doc = ClinicalDocument::from_proforma(&p);
        assert_eq!(doc.sections[0].total(), 1234.56);

        let mut pdf = RecordingSurface::new();
        draw_clinical(&mut pdf, &doc, None, "15/03/2024 10:00");

        assert!(pdf.has_text("TOTAL: Bs. 1.234,56"));
        assert!(pdf.has_text("Son: MIL DOSCIENTOS TREINTA Y CUATRO 56/100 BOLIVIANOS"));
        assert!(pdf.has_text("Estimado(a) Ana Rojas:"));
        assert!(pdf.has_text("Cochabamba, 15 de marzo de 2024"));
        assert!(pdf.has_text("Firma del paciente"));
        assert!(pdf.has_text("Luis Vargas"));
    }

    #[test]
    fn test_discount_columns_only_when_needed() {
        let plain = ClinicalDocument::from_proforma(&proforma(serde_json::json!([
            { "tratamiento": "Limpieza", "cantidad": 1, "precioUnitario": 150 }
        ])));
        let mut pdf = RecordingSurface::new();
        draw_clinical(&mut pdf, &plain, None, "x");
        assert_eq!(pdf.tables()[0].head.len(), 5);

        let discounted = ClinicalDocument::from_proforma(&proforma(serde_json::json!([
            { "tratamiento": "Limpieza", "cantidad": 1, "precioUnitario": 150 },
            { "tratamiento": "Corona", "cantidad": 1, "precioUnitario": 1200, "descuento": 10 }
        ])));
        let mut pdf = RecordingSurface::new();
        draw_clinical(&mut pdf, &discounted, None, "x");
        let table = &pdf.tables()[0];
        assert_eq!(table.head.len(), 7);
        assert_eq!(table.head[4], "Desc. %");
        assert!(pdf.has_text("TOTAL: Bs. 1.230,00"));
    }

    #[test]
    fn test_tooth_is_drawn_from_primitives() {
        let doc = ClinicalDocument::from_proforma(&proforma(serde_json::json!([
            { "tratamiento": "Limpieza", "cantidad": 1, "precioUnitario": 150 }
        ])));
        let mut pdf = RecordingSurface::new();
        draw_clinical(&mut pdf, &doc, None, "x");
        assert_eq!(pdf.count(|op| matches!(op, Op::Ellipse)), 2);
        assert!(pdf.count(|op| matches!(op, Op::RoundedRect(_))) >= 2);
    }

    #[test]
    fn test_proposal_has_section_per_option() {
        let p: Propuesta = serde_json::from_value(serde_json::json!({
            "id": 3,
            "paciente": { "id": 1, "nombre": "Ana", "apellido": "Rojas" },
            "items": [
                { "opcion": "B", "tratamiento": "Implante", "cantidad": 1, "precioUnitario": 5000 },
                { "opcion": "A", "tratamiento": "Puente", "cantidad": 1, "precioUnitario": 3000 }
            ]
        }))
        .unwrap();
        let doc = ClinicalDocument::from_propuesta(&p);
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].title.as_deref(), Some("Opción A"));

        let mut pdf = RecordingSurface::new();
        draw_clinical(&mut pdf, &doc, None, "x");
        // две таблицы вариантов и сводная
        assert_eq!(pdf.tables().len(), 3);
        assert!(pdf.has_text("TOTAL: Bs. 3.000,00"));
        assert!(pdf.has_text("TOTAL: Bs. 5.000,00"));
        assert_eq!(doc.file_name(), "propuesta_de_tratamiento_PR-00003.pdf");
    }
}
