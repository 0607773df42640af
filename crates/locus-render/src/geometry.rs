//! The fixed coordinate frame of the map and the fraction-to-angle mapping.
//!
//! The frame is a 320x320 logical canvas centered at (160,160). Screen
//! coordinates grow downward, so a positive angle progresses clockwise when
//! viewed on screen; fraction 0 sits at the 3 o'clock reference point.

use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Logical canvas edge, in pixels.
pub const CANVAS_SIZE: usize = 320;
pub const CENTER: Point = Point::new(160.0, 160.0);
pub const BACKBONE_RADIUS: f64 = 150.0;
pub const BACKBONE_WIDTH: f64 = 3.0;
pub const FEATURE_RADIUS: f64 = 155.0;
pub const MASK_RADIUS: f64 = 145.0;
/// Inner reference point of a feature wedge: near the center but offset
/// toward the edge, so wedge interiors always fall under the mask disk.
pub const WEDGE_APEX: Point = Point::new(150.0, 160.0);

/// Angle in radians of a fractional map position.
pub fn angle_of(fraction: f64) -> f64 {
    fraction * TAU
}

/// Point at `angle` on the radius-`radius` circle around `center`.
///
/// x uses `cos(-angle)` and y uses `sin(angle)`: the asymmetry compensates
/// for the y-down axis so the drawn direction is clockwise.
pub fn arc_point(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + radius * (-angle).cos(),
        center.y + radius * angle.sin(),
    )
}

/// Order an angle pair so the end lies ahead of the start.
///
/// An origin-crossing span arrives with `end < start`; pushing the end one
/// full turn forward keeps the swept interval contiguous.
pub fn normalize_arc(start_angle: f64, end_angle: f64) -> (f64, f64) {
    if end_angle < start_angle {
        (start_angle, end_angle + TAU)
    } else {
        (start_angle, end_angle)
    }
}
