/// Default layout width budget in px.
pub const WIDTH: f32 = 800.0;
/// Default horizontal page margin in px.
pub const HSTEP: f32 = 13.0;
/// Default top margin and paragraph gap in px.
pub const VSTEP: f32 = 18.0;
/// Font size a document starts in.
pub const BASE_FONT_SIZE: i32 = 12;

/// Per-call configuration for [`crate::layout`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    pub width: f32,
    pub hstep: f32,
    pub vstep: f32,
    pub base_size: i32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            hstep: HSTEP,
            vstep: VSTEP,
            base_size: BASE_FONT_SIZE,
        }
    }
}

impl LayoutOptions {
    /// Right edge a word may not cross, unless it is first on its line.
    pub(crate) fn line_limit(&self) -> f32 {
        self.width - self.hstep
    }
}
