//! `PdfSurface` поверх jsPDF + jspdf-autotable (UMD-сборки из index.html).

use super::{FontStyle, Paint, PdfSurface, Rgb, TableSpec, TextAlign, A4_WIDTH, MARGIN, WHITE};
use contracts::shared::report::ColumnAlign;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde_json::{json, Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

#[wasm_bindgen(js_namespace = jspdf)]
extern "C" {
    #[wasm_bindgen(js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_class = "jsPDF")]
    fn new(options: &JsValue) -> JsPdf;

    #[wasm_bindgen(method, js_name = setFont)]
    fn set_font(this: &JsPdf, family: &str, style: &str);

    #[wasm_bindgen(method, js_name = setFontSize)]
    fn set_font_size(this: &JsPdf, size: f64);

    #[wasm_bindgen(method, js_name = setTextColor)]
    fn set_text_color(this: &JsPdf, r: u8, g: u8, b: u8);

    #[wasm_bindgen(method, js_name = setDrawColor)]
    fn set_draw_color(this: &JsPdf, r: u8, g: u8, b: u8);

    #[wasm_bindgen(method, js_name = setFillColor)]
    fn set_fill_color(this: &JsPdf, r: u8, g: u8, b: u8);

    #[wasm_bindgen(method, js_name = setLineWidth)]
    fn set_line_width(this: &JsPdf, width: f64);

    #[wasm_bindgen(method)]
    fn text(this: &JsPdf, text: &str, x: f64, y: f64, options: &JsValue);

    #[wasm_bindgen(method)]
    fn line(this: &JsPdf, x1: f64, y1: f64, x2: f64, y2: f64);

    #[wasm_bindgen(method)]
    fn rect(this: &JsPdf, x: f64, y: f64, w: f64, h: f64, style: &str);

    #[wasm_bindgen(method, js_name = roundedRect)]
    fn rounded_rect(this: &JsPdf, x: f64, y: f64, w: f64, h: f64, rx: f64, ry: f64, style: &str);

    #[wasm_bindgen(method)]
    fn ellipse(this: &JsPdf, x: f64, y: f64, rx: f64, ry: f64, style: &str);

    #[wasm_bindgen(method, js_name = addImage, catch)]
    fn add_image(this: &JsPdf, data: &str, format: &str, x: f64, y: f64, w: f64, h: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = splitTextToSize)]
    fn split_text_to_size(this: &JsPdf, text: &str, max_width: f64) -> js_sys::Array;

    #[wasm_bindgen(method, js_name = addPage)]
    fn add_page(this: &JsPdf);

    #[wasm_bindgen(method, js_name = getNumberOfPages)]
    fn get_number_of_pages(this: &JsPdf) -> u32;

    #[wasm_bindgen(method, js_name = setPage)]
    fn set_page(this: &JsPdf, page: u32);

    #[wasm_bindgen(method, js_name = autoTable)]
    fn auto_table(this: &JsPdf, options: &JsValue);

    #[wasm_bindgen(method)]
    fn save(this: &JsPdf, filename: &str);

    #[wasm_bindgen(method)]
    fn output(this: &JsPdf, kind: &str) -> JsValue;
}

const FONT_FAMILY: &str = "helvetica";

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}

fn rgb(color: Rgb) -> Value {
    json!([color.0, color.1, color.2])
}

fn halign(align: ColumnAlign) -> &'static str {
    align.as_css()
}

pub struct JsPdfSurface {
    doc: JsPdf,
    font_size: f64,
}

impl JsPdfSurface {
    /// Портретный A4 в миллиметрах
    pub fn a4() -> Self {
        let options = to_js(&json!({ "orientation": "portrait", "unit": "mm", "format": "a4" }));
        let surface = Self {
            doc: JsPdf::new(&options),
            font_size: 10.0,
        };
        surface.doc.set_font(FONT_FAMILY, "normal");
        surface
    }

    pub fn save(&self, filename: &str) {
        self.doc.save(filename);
    }

    pub fn blob(&self) -> Result<Blob, String> {
        self.doc
            .output("blob")
            .dyn_into::<Blob>()
            .map_err(|_| "jsPDF did not return a Blob".to_string())
    }
}

impl PdfSurface for JsPdfSurface {
    fn set_font(&mut self, style: FontStyle, size: f64) {
        self.doc.set_font(FONT_FAMILY, style.as_js());
        self.doc.set_font_size(size);
        self.font_size = size;
    }

    fn set_text_color(&mut self, color: Rgb) {
        self.doc.set_text_color(color.0, color.1, color.2);
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.doc.set_draw_color(color.0, color.1, color.2);
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.doc.set_fill_color(color.0, color.1, color.2);
    }

    fn set_line_width(&mut self, width: f64) {
        self.doc.set_line_width(width);
    }

    fn text(&mut self, text: &str, x: f64, y: f64, align: TextAlign) {
        self.doc.text(text, x, y, &to_js(&json!({ "align": align.as_js() })));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.doc.line(x1, y1, x2, y2);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: Paint) {
        self.doc.rect(x, y, w, h, paint.as_js());
    }

    fn rounded_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64, paint: Paint) {
        self.doc.rounded_rect(x, y, w, h, r, r, paint.as_js());
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64, paint: Paint) {
        self.doc.ellipse(x, y, rx, ry, paint.as_js());
    }

    fn image(&mut self, data_url: &str, x: f64, y: f64, w: f64, h: f64) {
        if let Err(e) = self.doc.add_image(data_url, "PNG", x, y, w, h) {
            log::warn!("addImage failed: {:?}", e);
        }
    }

    fn wrap_text(&self, text: &str, max_width: f64) -> Vec<String> {
        self.doc
            .split_text_to_size(text, max_width)
            .iter()
            .filter_map(|v| v.as_string())
            .collect()
    }

    fn table(&mut self, spec: &TableSpec) -> f64 {
        let available = A4_WIDTH - 2.0 * MARGIN;
        let mut column_styles = Map::new();
        for (i, width) in spec.cell_widths(available).into_iter().enumerate() {
            let align = spec.aligns.get(i).copied().unwrap_or_default();
            let mut style = json!({ "halign": halign(align) });
            if let Some(w) = width {
                style["cellWidth"] = json!(w);
            }
            column_styles.insert(i.to_string(), style);
        }

        let options = json!({
            "startY": spec.start_y,
            "head": [spec.head],
            "body": spec.body,
            "theme": "grid",
            "margin": { "left": MARGIN, "right": MARGIN },
            "styles": { "fontSize": spec.font_size, "cellPadding": 2 },
            "headStyles": {
                "fillColor": rgb(spec.head_color),
                "textColor": rgb(WHITE),
                "fontStyle": "bold",
                "halign": "center"
            },
            "alternateRowStyles": { "fillColor": [245, 247, 250] },
            "columnStyles": Value::Object(column_styles),
        });
        self.doc.auto_table(&to_js(&options));

        // autoTable кладёт результат в doc.lastAutoTable.finalY
        js_sys::Reflect::get(self.doc.as_ref(), &JsValue::from_str("lastAutoTable"))
            .and_then(|t| js_sys::Reflect::get(&t, &JsValue::from_str("finalY")))
            .ok()
            .and_then(|y| y.as_f64())
            .unwrap_or(spec.start_y + 10.0)
    }

    fn add_page(&mut self) {
        self.doc.add_page();
    }

    fn page_count(&self) -> usize {
        self.doc.get_number_of_pages() as usize
    }

    fn set_page(&mut self, page: usize) {
        self.doc.set_page(page as u32);
    }
}

/// Логотип в PNG data URL: jsPDF не умеет SVG, поэтому рисуем через canvas.
///
/// `None`, если картинка не загрузилась за `timeout_ms`.
pub async fn load_logo_png(src: &str, size_px: u32, timeout_ms: u32) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let img = HtmlImageElement::new().ok()?;
    img.set_src(src);

    let mut waited = 0;
    while !(img.complete() && img.natural_width() > 0) {
        if waited >= timeout_ms {
            log::warn!("logo {} not loaded after {} ms", src, timeout_ms);
            return None;
        }
        TimeoutFuture::new(50).await;
        waited += 50;
    }

    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<HtmlCanvasElement>()
        .ok()?;
    canvas.set_width(size_px);
    canvas.set_height(size_px);
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, size_px as f64, size_px as f64)
        .ok()?;
    canvas.to_data_url_with_type("image/png").ok()
}
