//! SVG surface: builds the document as a string, one element per draw call.

use locus_core::color::Rgb;

use crate::geometry::{arc_point, Point};
use crate::surface::{Baseline, Surface, TextStyle};

use std::f64::consts::PI;

pub struct SvgSurface {
    width: usize,
    height: usize,
    body: String,
}

impl SvgSurface {
    pub fn new(width: usize, height: usize) -> Self {
        let mut body = String::new();
        body.push_str(&format!(
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            Rgb::WHITE.to_hex()
        ));
        Self {
            width,
            height,
            body,
        }
    }

    /// Consume the surface and return the finished SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">{body}</svg>",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Surface for SvgSurface {
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgb) {
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"/>",
            center.x, center.y, radius, color.to_hex(), width
        ));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.body.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"/>",
            center.x,
            center.y,
            radius,
            color.to_hex()
        ));
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgb) {
        self.body.push_str(&format!(
            "<path d=\"M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z\" fill=\"{}\"/>",
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y,
            color.to_hex()
        ));
    }

    fn fill_arc_segment(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    ) {
        let start = arc_point(center, radius, start_angle);
        let end = arc_point(center, radius, end_angle);
        let large_arc = if end_angle - start_angle > PI { 1 } else { 0 };
        // sweep=1: positive angles are clockwise in y-down coordinates.
        self.body.push_str(&format!(
            "<path d=\"M {:.2} {:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {:.2} {:.2} Z\" fill=\"{}\"/>",
            start.x,
            start.y,
            end.x,
            end.y,
            color.to_hex(),
            r = radius,
        ));
    }

    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) {
        let baseline = match style.baseline {
            Baseline::Top => "hanging",
            Baseline::Bottom => "alphabetic",
        };
        self.body.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"{}\" font-family=\"serif\" font-size=\"{}px\" fill=\"{}\">{}</text>",
            at.x,
            at.y,
            baseline,
            style.px,
            style.color.to_hex(),
            escape_xml(text)
        ));
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
