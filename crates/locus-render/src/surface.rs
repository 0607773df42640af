use locus_core::color::Rgb;

use crate::geometry::Point;

/// Vertical anchor for text placed on the map. Text is always centered
/// horizontally on its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Nominal glyph height in pixels.
    pub px: f32,
    pub baseline: Baseline,
    pub color: Rgb,
}

/// A 2D drawing surface the renderer issues commands against.
///
/// The surface is caller-owned and outlives a single render pass; the
/// renderer holds no state between passes. Implementations only need the
/// primitives below, in the screen coordinate convention of
/// [`crate::geometry`] (y down, angles clockwise).
pub trait Surface {
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgb);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgb);

    /// Fill the chord-bounded segment of the circle swept from `start_angle`
    /// to `end_angle` (radians, `end_angle >= start_angle`).
    fn fill_arc_segment(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    );

    /// Draw `text` horizontally centered on `at`.
    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle);
}
