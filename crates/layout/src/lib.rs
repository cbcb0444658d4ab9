//! Turns a token stream into a flat, absolutely positioned display list.

mod engine;
mod error;
mod font_cache;
mod options;
mod text;

#[cfg(test)]
mod tests;

pub use engine::{DisplayEntry, content_height, layout};
pub use error::LayoutError;
pub use font_cache::{CachedFont, FontCache};
pub use options::{BASE_FONT_SIZE, HSTEP, LayoutOptions, VSTEP, WIDTH};
pub use text::{FontMetrics, FontProvider};
