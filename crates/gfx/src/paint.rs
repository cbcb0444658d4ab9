use egui::{Painter, Pos2, Sense, Ui, Vec2};
use layout::{DisplayEntry, FontCache, LayoutError};

use crate::text_measurer::{EguiFont, EguiFonts};
use crate::viewport::{Viewport, render};
use crate::Canvas;

/// [`Canvas`] over an egui painter; coordinates are relative to `origin`.
pub struct PainterCanvas<'p> {
    painter: &'p Painter,
    origin: Pos2,
}

impl<'p> PainterCanvas<'p> {
    pub fn new(painter: &'p Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl Canvas for PainterCanvas<'_> {
    type Font = EguiFont;

    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &EguiFont) {
        let galley = self.painter.layout_job(font.layout_job(text));
        let pos = self.origin + Vec2::new(x, y);
        self.painter.galley(pos, galley, font.color);
    }
}

/// Fills the remaining space of `ui` with the visible part of `list`.
///
/// `viewport.height` is updated to the space actually available before
/// culling. Returns the number of words drawn.
pub fn paint_page(
    ui: &mut Ui,
    list: &[DisplayEntry],
    fonts: &FontCache<EguiFonts>,
    viewport: &mut Viewport,
) -> Result<usize, LayoutError> {
    let size = ui.available_size();
    let (rect, _resp) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    viewport.height = rect.height();

    let mut canvas = PainterCanvas::new(&painter, rect.min);
    let drawn = render(list, fonts, *viewport, &mut canvas)?;
    log::trace!(
        target: "gfx.paint",
        "drew {drawn}/{} entries at scroll {}",
        list.len(),
        viewport.scroll
    );
    Ok(drawn)
}
