use layout::{DisplayEntry, FontCache, FontProvider, LayoutError};

use crate::Canvas;

/// Window and scrolling defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    pub width: f32,
    pub height: f32,
    pub scroll_step: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            scroll_step: 100.0,
        }
    }
}

/// The visible vertical band of the page: `scroll..scroll + height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scroll: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll: f32, height: f32) -> Self {
        Self { scroll, height }
    }

    /// Moves by `delta`, staying within `0..=max_scroll`.
    pub fn scroll_by(&mut self, delta: f32, max_scroll: f32) {
        self.scroll = (self.scroll + delta).min(max_scroll).max(0.0);
    }

    /// Whether a line starting at `y` and `line_height` tall intersects the band.
    pub fn shows(&self, y: f32, line_height: f32) -> bool {
        if y > self.scroll + self.height {
            return false;
        }
        y + line_height >= self.scroll
    }
}

/// Draws the entries of `list` that intersect `viewport`, translated into
/// viewport coordinates. Returns the number of draw calls issued.
///
/// Font lookups hit the cache populated by layout; the list is never touched.
pub fn render<P, C>(
    list: &[DisplayEntry],
    fonts: &FontCache<P>,
    viewport: Viewport,
    canvas: &mut C,
) -> Result<usize, LayoutError>
where
    P: FontProvider,
    C: Canvas<Font = P::Font>,
{
    let mut drawn = 0;
    for entry in list {
        if entry.y > viewport.scroll + viewport.height {
            continue;
        }
        let font = fonts.get(entry.font)?;
        if !viewport.shows(entry.y, font.metrics().line_height) {
            continue;
        }
        canvas.draw_text(entry.x, entry.y - viewport.scroll, &entry.word, font.font());
        drawn += 1;
    }
    Ok(drawn)
}
