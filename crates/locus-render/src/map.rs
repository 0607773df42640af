//! The plasmid map render pass.
//!
//! Draw order matters and is the core of the design: backbone first, then
//! every feature wedge, then one white mask disk over the interior, then
//! the label. The mask composites overlapping wedges into clean outer ring
//! segments, so per-feature z-order never has to be managed; drawing it
//! before the last wedge would let color leak into the center.

use log::debug;

use locus_core::color::Rgb;
use locus_core::{FeatureKind, FracSpan, Plasmid};

use crate::geometry::{
    angle_of, arc_point, normalize_arc, Point, BACKBONE_RADIUS, BACKBONE_WIDTH, CENTER,
    FEATURE_RADIUS, MASK_RADIUS, WEDGE_APEX,
};
use crate::surface::{Baseline, Surface, TextStyle};
use crate::RenderError;

/// Colors and font sizes of the fixed chrome around the feature wedges.
#[derive(Debug, Clone)]
pub struct MapStyle {
    /// Backbone ring and label ink.
    pub ink: Rgb,
    /// Mask disk color; matches the page background.
    pub mask: Rgb,
    /// Plasmid name, drawn above the center line.
    pub title_px: f32,
    /// "(N bp)" annotation, drawn below the name.
    pub annotation_px: f32,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            ink: Rgb::BLACK,
            mask: Rgb::WHITE,
            title_px: 18.0,
            annotation_px: 14.0,
        }
    }
}

/// Stroke the circular backbone: radius 150 at (160,160), line width 3.
pub fn draw_backbone(surface: &mut dyn Surface, style: &MapStyle) {
    surface.stroke_circle(CENTER, BACKBONE_RADIUS, BACKBONE_WIDTH, style.ink);
}

/// Write the plasmid name and its size, stacked around the center line.
pub fn draw_label(surface: &mut dyn Surface, name: &str, seq_len: usize, style: &MapStyle) {
    surface.fill_text(
        name,
        Point::new(CENTER.x, 155.0),
        TextStyle {
            px: style.title_px,
            baseline: Baseline::Bottom,
            color: style.ink,
        },
    );
    surface.fill_text(
        &format!("({seq_len} bp)"),
        CENTER,
        TextStyle {
            px: style.annotation_px,
            baseline: Baseline::Top,
            color: style.ink,
        },
    );
}

/// Draw one feature wedge in the kind's map color.
pub fn draw_feature(
    surface: &mut dyn Surface,
    span: FracSpan,
    kind: FeatureKind,
) -> Result<(), RenderError> {
    draw_wedge(surface, span, kind.color())
}

/// Draw one feature wedge in an explicit color.
///
/// The wedge is a filled triangle from the two radius-155 arc endpoints to
/// the apex at (150,160), plus the filled arc segment between them. Its
/// interior is meant to be overdrawn by [`mask_interior`].
pub fn draw_wedge(
    surface: &mut dyn Surface,
    span: FracSpan,
    color: Rgb,
) -> Result<(), RenderError> {
    if !(0.0..1.0).contains(&span.start) || !(0.0..1.0).contains(&span.end) {
        return Err(RenderError::InvalidSpan {
            start: span.start,
            end: span.end,
        });
    }
    if span.start == span.end {
        return Err(RenderError::EmptySpan(span.start));
    }

    let (start_angle, end_angle) = normalize_arc(angle_of(span.start), angle_of(span.end));
    let start_point = arc_point(CENTER, FEATURE_RADIUS, start_angle);
    let end_point = arc_point(CENTER, FEATURE_RADIUS, end_angle);

    surface.fill_triangle(start_point, WEDGE_APEX, end_point, color);
    surface.fill_arc_segment(CENTER, FEATURE_RADIUS, start_angle, end_angle, color);
    Ok(())
}

/// Overdraw the interior with the mask disk (radius 145), leaving only the
/// outer band of every wedge visible.
pub fn mask_interior(surface: &mut dyn Surface, style: &MapStyle) {
    surface.fill_circle(CENTER, MASK_RADIUS, style.mask);
}

/// One full synchronous render pass. Stateless; every call redraws the map
/// from scratch.
pub fn render(
    surface: &mut dyn Surface,
    plasmid: &Plasmid,
    style: &MapStyle,
) -> Result<(), RenderError> {
    debug!(
        "rendering map for {} ({} bp, {} features)",
        plasmid.name,
        plasmid.len(),
        plasmid.features.len()
    );
    draw_backbone(surface, style);
    for feature in &plasmid.features {
        draw_wedge(
            surface,
            feature.span.fractions(plasmid.len()),
            feature.effective_color(),
        )?;
    }
    mask_interior(surface, style);
    draw_label(surface, &plasmid.name, plasmid.len(), style);
    Ok(())
}
