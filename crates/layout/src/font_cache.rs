use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use core_types::FontSpec;

use crate::{FontMetrics, FontProvider, LayoutError};

/// A resolved font plus the per-font values layout asks for on every word.
#[derive(Debug)]
pub struct CachedFont<F> {
    spec: FontSpec,
    font: F,
    metrics: FontMetrics,
    space_width: f32,
}

impl<F> CachedFont<F> {
    pub fn spec(&self) -> FontSpec {
        self.spec
    }

    /// The provider's handle, e.g. for drawing.
    pub fn font(&self) -> &F {
        &self.font
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Width of one inter-word space in this font.
    pub fn space_width(&self) -> f32 {
        self.space_width
    }
}

/// Memoizes font resolution keyed by [`FontSpec`].
///
/// Entries are never evicted: the key space is bounded by the handful of
/// weights, styles and sizes markup can produce. Every lookup for the same
/// spec returns the same `Arc`.
pub struct FontCache<P: FontProvider> {
    provider: P,
    fonts: RefCell<HashMap<FontSpec, Arc<CachedFont<P::Font>>>>,
}

impl<P: FontProvider> FontCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            fonts: RefCell::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the cached font for `spec`, resolving it on first use.
    ///
    /// A failed resolution is not cached; the next call asks the provider
    /// again.
    pub fn get(&self, spec: FontSpec) -> Result<Arc<CachedFont<P::Font>>, LayoutError> {
        if let Some(hit) = self.fonts.borrow().get(&spec) {
            return Ok(Arc::clone(hit));
        }

        let font = self.provider.resolve(spec)?;
        let metrics = self.provider.metrics(&font);
        let space_width = self.provider.measure(" ", &font);
        log::debug!(
            target: "layout.fonts",
            "resolved {spec}: ascent={:.2} descent={:.2} space={space_width:.2}",
            metrics.ascent,
            metrics.descent
        );

        let entry = Arc::new(CachedFont {
            spec,
            font,
            metrics,
            space_width,
        });
        self.fonts.borrow_mut().insert(spec, Arc::clone(&entry));
        Ok(entry)
    }

    /// Width of `text` set in `font`.
    pub fn measure(&self, text: &str, font: &CachedFont<P::Font>) -> f32 {
        self.provider.measure(text, &font.font)
    }

    pub fn len(&self) -> usize {
        self.fonts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.borrow().is_empty()
    }
}
