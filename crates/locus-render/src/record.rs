//! A surface that records draw commands instead of producing output.
//! Used by tests to assert geometry and draw order.

use locus_core::color::Rgb;

use crate::geometry::Point;
use crate::surface::{Baseline, Surface, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Rgb,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgb,
    },
    FillTriangle {
        a: Point,
        b: Point,
        c: Point,
        color: Rgb,
    },
    FillArcSegment {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    },
    FillText {
        text: String,
        at: Point,
        px: f32,
        baseline: Baseline,
        color: Rgb,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Surface for Recorder {
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Rgb) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Rgb) {
        self.commands
            .push(DrawCommand::FillTriangle { a, b, c, color });
    }

    fn fill_arc_segment(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        color: Rgb,
    ) {
        self.commands.push(DrawCommand::FillArcSegment {
            center,
            radius,
            start_angle,
            end_angle,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            px: style.px,
            baseline: style.baseline,
            color: style.color,
        });
    }
}
