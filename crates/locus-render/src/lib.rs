pub mod geometry;
pub mod map;
pub mod pixmap;
pub mod record;
pub mod surface;
pub mod svg;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("feature span out of range: {start}..{end} (fractions must lie in [0,1))")]
    InvalidSpan { start: f64, end: f64 },
    #[error("feature span is empty at {0}")]
    EmptySpan(f64),
    #[error("PNG encode failed: {0}")]
    Png(#[from] lodepng::Error),
}

pub use map::{draw_backbone, draw_feature, draw_label, draw_wedge, mask_interior, render, MapStyle};
pub use pixmap::Pixmap;
pub use record::{DrawCommand, Recorder};
pub use surface::{Baseline, Surface, TextStyle};
pub use svg::SvgSurface;
