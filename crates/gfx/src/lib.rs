//! Presentation: viewport culling, the egui font provider and painter, and
//! the wgpu surface that hosts egui.

mod canvas;
pub mod gpu;
pub mod paint;
pub mod text_measurer;
pub mod viewport;

pub use canvas::Canvas;
pub use gpu::{GpuError, GpuRenderer};
pub use paint::{PainterCanvas, paint_page};
pub use text_measurer::{EguiFont, EguiFonts};
pub use viewport::{Viewport, ViewportConfig, render};
