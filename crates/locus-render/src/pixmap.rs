//! Raster surface: an RGB8 pixel buffer with PNG export.
//!
//! Shapes are rasterized directly (per-pixel ring tests for circles,
//! scanline fill for polygons, arcs approximated by sampled polylines).
//! Text goes through an `embedded-graphics` draw-target adapter so the
//! label uses its bitmap fonts instead of a font file.

use std::convert::Infallible;
use std::f64::consts::TAU;
use std::path::Path;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point as EgPoint, Size};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_7X13};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::text::{Alignment, Baseline as EgBaseline, Text, TextStyleBuilder};
use embedded_graphics::{Drawable, Pixel};
use rgb::RGB8;

use locus_core::color::Rgb;

use crate::geometry::{arc_point, Point};
use crate::surface::{Baseline, Surface, TextStyle};
use crate::RenderError;

/// Angular step for approximating arcs with polylines, in radians (0.5 deg).
const ARC_STEP: f64 = TAU / 720.0;

pub struct Pixmap {
    width: usize,
    height: usize,
    pixels: Vec<RGB8>,
}

impl Pixmap {
    /// A white canvas of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![px(Rgb::WHITE); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> RGB8 {
        self.pixels[y * self.width + x]
    }

    fn set(&mut self, x: i64, y: i64, color: RGB8) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = color;
        }
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        lodepng::encode24_file(path, &self.pixels, self.width, self.height)?;
        Ok(())
    }

    /// Fill every pixel whose distance from `center` lies in `[inner, outer]`.
    fn fill_ring(&mut self, center: Point, inner: f64, outer: f64, color: RGB8) {
        let x0 = (center.x - outer).floor() as i64;
        let x1 = (center.x + outer).ceil() as i64;
        let y0 = (center.y - outer).floor() as i64;
        let y1 = (center.y + outer).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                if d >= inner && d <= outer {
                    self.set(x, y, color);
                }
            }
        }
    }

    /// Even-odd scanline fill of a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: RGB8) {
        if points.len() < 3 {
            return;
        }
        let y0 = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let y1 = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let mut crossings: Vec<f64> = Vec::new();
        for y in (y0.floor() as i64)..=(y1.ceil() as i64) {
            let fy = y as f64 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let p = points[i];
                let q = points[(i + 1) % points.len()];
                if (p.y <= fy && q.y > fy) || (q.y <= fy && p.y > fy) {
                    let t = (fy - p.y) / (q.y - p.y);
                    crossings.push(p.x + t * (q.x - p.x));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let from = pair[0].round() as i64;
                let to = pair[1].round() as i64;
                for x in from..=to {
                    self.set(x, y, color);
                }
            }
        }
    }
}

impl Surface for Pixmap {
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgb) {
        self.fill_ring(center, radius - width / 2.0, radius + width / 2.0, px(color));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.fill_ring(center, 0.0, radius, px(color));
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgb) {
        self.fill_polygon(&[a, b, c], px(color));
    }

    fn fill_arc_segment(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    ) {
        let steps = (((end_angle - start_angle) / ARC_STEP).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(steps + 1);
        for i in 0..=steps {
            let angle = start_angle + (end_angle - start_angle) * i as f64 / steps as f64;
            points.push(arc_point(center, radius, angle));
        }
        // The closing edge back to the start point is the chord.
        self.fill_polygon(&points, px(color));
    }

    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) {
        let font = if style.px >= 16.0 {
            &FONT_10X20
        } else {
            &FONT_7X13
        };
        let character_style =
            MonoTextStyle::new(font, Rgb888::new(style.color.r, style.color.g, style.color.b));
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(match style.baseline {
                Baseline::Top => EgBaseline::Top,
                Baseline::Bottom => EgBaseline::Bottom,
            })
            .build();
        let anchor = EgPoint::new(at.x.round() as i32, at.y.round() as i32);
        // Drawing onto a Pixmap is infallible.
        let _ = Text::with_text_style(text, anchor, character_style, text_style).draw(self);
    }
}

impl OriginDimensions for Pixmap {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for Pixmap {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(
                point.x as i64,
                point.y as i64,
                RGB8::new(color.r(), color.g(), color.b()),
            );
        }
        Ok(())
    }
}

fn px(color: Rgb) -> RGB8 {
    RGB8::new(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pixmap_is_white() {
        let pm = Pixmap::new(4, 4);
        assert_eq!(pm.get(0, 0), RGB8::new(255, 255, 255));
        assert_eq!(pm.get(3, 3), RGB8::new(255, 255, 255));
    }

    #[test]
    fn test_fill_circle_hits_center_not_corner() {
        let mut pm = Pixmap::new(100, 100);
        pm.fill_circle(Point::new(50.0, 50.0), 20.0, Rgb::BLACK);
        assert_eq!(pm.get(50, 50), RGB8::new(0, 0, 0));
        assert_eq!(pm.get(0, 0), RGB8::new(255, 255, 255));
    }

    #[test]
    fn test_stroke_circle_leaves_interior() {
        let mut pm = Pixmap::new(100, 100);
        pm.stroke_circle(Point::new(50.0, 50.0), 30.0, 3.0, Rgb::BLACK);
        // On the ring.
        assert_eq!(pm.get(80, 50), RGB8::new(0, 0, 0));
        // Well inside it.
        assert_eq!(pm.get(50, 50), RGB8::new(255, 255, 255));
    }

    #[test]
    fn test_fill_triangle() {
        let mut pm = Pixmap::new(100, 100);
        pm.fill_triangle(
            Point::new(10.0, 10.0),
            Point::new(90.0, 10.0),
            Point::new(10.0, 90.0),
            Rgb::INDIGO,
        );
        assert_eq!(pm.get(20, 20), RGB8::new(75, 0, 130));
        assert_eq!(pm.get(90, 90), RGB8::new(255, 255, 255));
    }

    #[test]
    fn test_fill_text_marks_pixels() {
        let mut pm = Pixmap::new(100, 40);
        pm.fill_text(
            "pUC19",
            Point::new(50.0, 20.0),
            TextStyle {
                px: 18.0,
                baseline: Baseline::Top,
                color: Rgb::BLACK,
            },
        );
        let inked = (0..40)
            .flat_map(|y| (0..100).map(move |x| (x, y)))
            .filter(|&(x, y)| pm.get(x, y) == RGB8::new(0, 0, 0))
            .count();
        assert!(inked > 0);
    }

    #[test]
    fn test_out_of_bounds_draws_are_clipped() {
        let mut pm = Pixmap::new(10, 10);
        pm.fill_circle(Point::new(0.0, 0.0), 50.0, Rgb::BLACK);
        assert_eq!(pm.get(9, 9), RGB8::new(0, 0, 0));
    }
}
