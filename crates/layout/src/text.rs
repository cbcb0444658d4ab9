use core_types::FontSpec;

use crate::LayoutError;

/// Vertical metrics of a resolved font, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    /// Glyph extent above the baseline.
    pub ascent: f32,
    /// Glyph extent below the baseline.
    pub descent: f32,
    /// Distance between consecutive baselines when set solid.
    pub line_height: f32,
}

/// Layout depends on this without knowing about egui, wgpu, etc.
///
/// `resolve` may be expensive; callers go through [`crate::FontCache`] so
/// each spec is resolved once.
pub trait FontProvider {
    /// Opaque handle for a resolved font.
    type Font;

    /// Build a font for `spec`, or fail if the backend cannot satisfy it.
    fn resolve(&self, spec: FontSpec) -> Result<Self::Font, LayoutError>;

    /// Return the advance width of `text` in px.
    fn measure(&self, text: &str, font: &Self::Font) -> f32;

    fn metrics(&self, font: &Self::Font) -> FontMetrics;
}
