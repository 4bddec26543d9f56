//! Генерация PDF.
//!
//! Раскладки (`report`, `clinical`) рисуют через трейт `PdfSurface`,
//! а не напрямую через jsPDF: в тестах вместо браузера подставляется
//! записывающая поверхность.

pub mod clinical;
pub mod jspdf;
pub mod report;

use contracts::shared::report::ColumnAlign;

/// A4 в миллиметрах
pub const A4_WIDTH: f64 = 210.0;
pub const A4_HEIGHT: f64 = 297.0;
pub const MARGIN: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BRAND: Rgb = Rgb(15, 118, 110);
pub const BRAND_LIGHT: Rgb = Rgb(230, 244, 242);
pub const TEXT: Rgb = Rgb(31, 41, 51);
pub const MUTED: Rgb = Rgb(123, 135, 148);
pub const WHITE: Rgb = Rgb(255, 255, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
}

impl FontStyle {
    pub fn as_js(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
        }
    }
}

/// Как закрашивать фигуру
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Stroke,
    Fill,
    FillStroke,
}

impl Paint {
    /// Код стиля jsPDF
    pub fn as_js(&self) -> &'static str {
        match self {
            Paint::Stroke => "S",
            Paint::Fill => "F",
            Paint::FillStroke => "FD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_js(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Таблица autoTable
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub start_y: f64,
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub aligns: Vec<ColumnAlign>,
    /// Доли ширины; 0 для автоматической
    pub weights: Vec<f64>,
    pub head_color: Rgb,
    pub font_size: f64,
}

impl TableSpec {
    pub fn new(start_y: f64, head: Vec<String>, body: Vec<Vec<String>>) -> Self {
        let columns = head.len();
        Self {
            start_y,
            head,
            body,
            aligns: vec![ColumnAlign::Left; columns],
            weights: vec![0.0; columns],
            head_color: BRAND,
            font_size: 9.0,
        }
    }

    pub fn with_aligns(mut self, aligns: Vec<ColumnAlign>) -> Self {
        self.aligns = aligns;
        self
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = weights;
        self
    }

    /// Ширины колонок в мм для доступной ширины; `None` там, где auto
    pub fn cell_widths(&self, available: f64) -> Vec<Option<f64>> {
        let sum: f64 = self.weights.iter().filter(|w| **w > 0.0).sum();
        self.weights
            .iter()
            .map(|w| {
                if *w > 0.0 && sum > 0.0 {
                    Some(available * w / sum)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Всё, что раскладкам нужно от PDF-документа.
pub trait PdfSurface {
    fn page_size(&self) -> (f64, f64) {
        (A4_WIDTH, A4_HEIGHT)
    }

    fn set_font(&mut self, style: FontStyle, size: f64);
    fn set_text_color(&mut self, color: Rgb);
    fn set_draw_color(&mut self, color: Rgb);
    fn set_fill_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f64);

    fn text(&mut self, text: &str, x: f64, y: f64, align: TextAlign);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: Paint);
    fn rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64, paint: Paint);
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, paint: Paint);
    /// PNG data URL
    fn image(&mut self, data_url: &str, x: f64, y: f64, w: f64, h: f64);

    /// Перенос строки по ширине текущего шрифта
    fn wrap_text(&self, text: &str, max_width: f64) -> Vec<String>;

    /// Рисует таблицу, возвращает y под ней (с учётом переноса страниц)
    fn table(&mut self, spec: &TableSpec) -> f64;

    fn add_page(&mut self);
    fn page_count(&self) -> usize;
    /// Номер страницы с 1
    fn set_page(&mut self, page: usize);
}

/// Рисует абзац с переносом, возвращает y под ним
pub fn paragraph<S: PdfSurface>(pdf: &mut S, text: &str, x: f64, y: f64, max_width: f64, line_height: f64) -> f64 {
    let mut y = y;
    for line in pdf.wrap_text(text, max_width) {
        pdf.text(&line, x, y, TextAlign::Left);
        y += line_height;
    }
    y
}

/// Новая страница, если до нижнего поля меньше `needed` мм
pub fn ensure_space<S: PdfSurface>(pdf: &mut S, y: f64, needed: f64) -> f64 {
    let (_, height) = pdf.page_size();
    if y + needed > height - MARGIN - 10.0 {
        pdf.add_page();
        MARGIN + 5.0
    } else {
        y
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! Поверхность для тестов: запоминает вызовы вместо рисования.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Text { text: String, x: f64, y: f64, align: TextAlign, page: usize },
        Line,
        Rect(Paint),
        RoundedRect(Paint),
        Ellipse,
        Image,
        Table(TableSpec),
        Font(FontStyle, f64),
    }

    pub struct RecordingSurface {
        pub ops: Vec<Op>,
        pub pages: usize,
        pub current: usize,
        /// Высота строки таблицы для расчёта `finalY`
        pub row_height: f64,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self {
                ops: Vec::new(),
                pages: 1,
                current: 1,
                row_height: 7.0,
            }
        }

        pub fn texts(&self) -> Vec<String> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text { text, .. } => Some(text.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn has_text(&self, needle: &str) -> bool {
            self.texts().iter().any(|t| t.contains(needle))
        }

        pub fn tables(&self) -> Vec<TableSpec> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Table(t) => Some(t.clone()),
                    _ => None,
                })
                .collect()
        }

        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }
    }

    impl PdfSurface for RecordingSurface {
        fn set_font(&mut self, style: FontStyle, size: f64) {
            self.ops.push(Op::Font(style, size));
        }
        fn set_text_color(&mut self, _color: Rgb) {}
        fn set_draw_color(&mut self, _color: Rgb) {}
        fn set_fill_color(&mut self, _color: Rgb) {}
        fn set_line_width(&mut self, _width: f64) {}

        fn text(&mut self, text: &str, x: f64, y: f64, align: TextAlign) {
            self.ops.push(Op::Text {
                text: text.to_string(),
                x,
                y,
                align,
                page: self.current,
            });
        }
        fn line(&mut self, _x1: f64, _y1: f64, _x2: f64, _y2: f64) {
            self.ops.push(Op::Line);
        }
        fn rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, paint: Paint) {
            self.ops.push(Op::Rect(paint));
        }
        fn rounded_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _r: f64, paint: Paint) {
            self.ops.push(Op::RoundedRect(paint));
        }
        fn ellipse(&mut self, _x: f64, _y: f64, _rx: f64, _ry: f64, _paint: Paint) {
            self.ops.push(Op::Ellipse);
        }
        fn image(&mut self, _data_url: &str, _x: f64, _y: f64, _w: f64, _h: f64) {
            self.ops.push(Op::Image);
        }

        // ~2 мм на символ
        fn wrap_text(&self, text: &str, max_width: f64) -> Vec<String> {
            let per_line = (max_width / 2.0).max(1.0) as usize;
            let mut lines = Vec::new();
            let mut current = String::new();
            for word in text.split_whitespace() {
                if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > per_line {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            if !current.is_empty() {
                lines.push(current);
            }
            lines
        }

        fn table(&mut self, spec: &TableSpec) -> f64 {
            self.ops.push(Op::Table(spec.clone()));
            spec.start_y + (spec.body.len() as f64 + 1.0) * self.row_height
        }

        fn add_page(&mut self) {
            self.pages += 1;
            self.current = self.pages;
        }
        fn page_count(&self) -> usize {
            self.pages
        }
        fn set_page(&mut self, page: usize) {
            self.current = page;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingSurface;
    use super::*;

    #[test]
    fn test_cell_widths() {
        let spec = TableSpec::new(0.0, vec!["a".into(), "b".into(), "c".into()], vec![])
            .with_weights(vec![3.0, 1.0, 0.0]);
        assert_eq!(spec.cell_widths(180.0), vec![Some(135.0), Some(45.0), None]);
    }

    #[test]
    fn test_paragraph_wraps() {
        let mut pdf = RecordingSurface::new();
        let y = paragraph(&mut pdf, "uno dos tres cuatro cinco seis", 10.0, 50.0, 20.0, 5.0);
        assert_eq!(pdf.texts(), vec!["uno dos", "tres", "cuatro", "cinco seis"]);
        assert_eq!(y, 70.0);
    }

    #[test]
    fn test_ensure_space_breaks_page() {
        let mut pdf = RecordingSurface::new();
        assert_eq!(ensure_space(&mut pdf, 100.0, 20.0), 100.0);
        assert_eq!(pdf.page_count(), 1);
        assert_eq!(ensure_space(&mut pdf, 260.0, 20.0), MARGIN + 5.0);
        assert_eq!(pdf.page_count(), 2);
    }
}
