use core_types::FontSpec;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, Context, FontId};
use layout::{FontMetrics, FontProvider, LayoutError};

/// Share of the font size that sits above the baseline. egui does not expose
/// per-face ascent, so we use the usual 80/20 em-box split.
const ASCENT_RATIO: f32 = 0.8;

/// egui font configuration for one [`FontSpec`].
#[derive(Clone, Debug, PartialEq)]
pub struct EguiFont {
    pub font_id: FontId,
    pub italics: bool,
    /// egui ships no bold face; bold text is drawn in the strong text colour.
    pub color: Color32,
}

impl EguiFont {
    pub(crate) fn layout_job(&self, text: &str) -> LayoutJob {
        LayoutJob::single_section(
            text.to_owned(),
            TextFormat {
                font_id: self.font_id.clone(),
                color: self.color,
                italics: self.italics,
                ..Default::default()
            },
        )
    }
}

/// `egui`-backed font provider for layout.
pub struct EguiFonts {
    ctx: Context,
}

impl EguiFonts {
    pub fn new(ctx: &Context) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }
}

impl FontProvider for EguiFonts {
    type Font = EguiFont;

    fn resolve(&self, spec: FontSpec) -> Result<EguiFont, LayoutError> {
        if spec.size <= 0 {
            return Err(LayoutError::UnresolvableFont(spec));
        }

        let style = self.ctx.style();
        let color = if spec.is_bold() {
            style.visuals.strong_text_color()
        } else {
            style.visuals.text_color()
        };

        Ok(EguiFont {
            font_id: FontId::proportional(spec.size as f32),
            italics: spec.is_italic(),
            color,
        })
    }

    fn measure(&self, text: &str, font: &EguiFont) -> f32 {
        // A lone space lays out to zero width; NBSP has the same advance and
        // survives layout.
        let text = if text == " " { "\u{00A0}" } else { text };
        let job = font.layout_job(text);
        let width = self.ctx.fonts(|f| f.layout_job(job).rect.width());

        if width.is_finite() {
            width
        } else {
            (font.font_id.size * 0.33).max(1.0)
        }
    }

    fn metrics(&self, font: &EguiFont) -> FontMetrics {
        let px = font.font_id.size;
        let ascent = px * ASCENT_RATIO;
        let line_height = self.ctx.fonts(|f| f.row_height(&font.font_id));
        FontMetrics {
            ascent,
            descent: px - ascent,
            line_height,
        }
    }
}
