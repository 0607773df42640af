use std::f64::consts::{PI, TAU};

use locus_core::color::Rgb;
use locus_core::{Feature, FeatureKind, FracSpan, Plasmid};
use locus_render::geometry::{angle_of, arc_point, CANVAS_SIZE, CENTER, FEATURE_RADIUS};
use locus_render::{
    draw_feature, draw_label, render, DrawCommand, MapStyle, Pixmap, Recorder, SvgSurface,
};
use pretty_assertions::assert_eq;
use rgb::RGB8;

const EPS: f64 = 1e-9;

fn puc19() -> Plasmid {
    let mut p = Plasmid::new("pUC19", "A".repeat(2686));
    p.add_feature(Feature::new("lacZa", FeatureKind::Gene, 146, 469));
    p.add_feature(Feature::new("Plac", FeatureKind::Promoter, 507, 537));
    p.add_feature(Feature::new("ori", FeatureKind::Origin, 867, 1455));
    // Crosses the origin.
    p.add_feature(Feature::new("AmpR", FeatureKind::Other, 2486, 160));
    p
}

#[test]
fn angular_span_matches_fraction_span() {
    let mut rec = Recorder::default();
    draw_feature(&mut rec, FracSpan::new(0.1, 0.35), FeatureKind::Gene).unwrap();
    let arc = rec
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::FillArcSegment {
                start_angle,
                end_angle,
                ..
            } => Some((*start_angle, *end_angle)),
            _ => None,
        })
        .expect("no arc segment recorded");
    assert!((arc.1 - arc.0 - 0.25 * TAU).abs() < EPS);
}

#[test]
fn wrap_span_draws_without_error_and_keeps_endpoints() {
    let mut rec = Recorder::default();
    draw_feature(&mut rec, FracSpan::new(0.9, 0.1), FeatureKind::Origin).unwrap();

    let (a, c) = match &rec.commands[0] {
        DrawCommand::FillTriangle { a, c, .. } => (*a, *c),
        other => panic!("expected wedge triangle first, got {other:?}"),
    };
    let expected_start = arc_point(CENTER, FEATURE_RADIUS, angle_of(0.9));
    let expected_end = arc_point(CENTER, FEATURE_RADIUS, angle_of(0.1));
    assert!((a.x - expected_start.x).abs() < 1e-6);
    assert!((a.y - expected_start.y).abs() < 1e-6);
    // The end angle is pushed one turn forward; the point is periodic.
    assert!((c.x - expected_end.x).abs() < 1e-6);
    assert!((c.y - expected_end.y).abs() < 1e-6);

    let span = rec
        .commands
        .iter()
        .find_map(|cmd| match cmd {
            DrawCommand::FillArcSegment {
                start_angle,
                end_angle,
                ..
            } => Some(end_angle - start_angle),
            _ => None,
        })
        .unwrap();
    assert!((span - 0.2 * TAU).abs() < EPS);
}

#[test]
fn render_order_is_backbone_wedges_mask_label() {
    let mut rec = Recorder::default();
    render(&mut rec, &puc19(), &MapStyle::default()).unwrap();

    assert!(matches!(rec.commands[0], DrawCommand::StrokeCircle { .. }));

    let mask_idx = rec
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::FillCircle { color: Rgb::WHITE, .. }))
        .expect("no mask disk drawn");
    let last_wedge_idx = rec
        .commands
        .iter()
        .rposition(|c| {
            matches!(
                c,
                DrawCommand::FillTriangle { .. } | DrawCommand::FillArcSegment { .. }
            )
        })
        .unwrap();
    assert!(mask_idx > last_wedge_idx, "mask must come after all wedges");

    let first_text_idx = rec
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::FillText { .. }))
        .expect("no label drawn");
    assert!(first_text_idx > mask_idx, "label must come after the mask");
}

#[test]
fn label_text_and_anchors() {
    let mut rec = Recorder::default();
    draw_label(&mut rec, "pUC19", 2686, &MapStyle::default());

    let texts: Vec<_> = rec
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillText { text, at, px, .. } => Some((text.clone(), *at, *px)),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(texts[0].0, "pUC19");
    assert_eq!((texts[0].1.x, texts[0].1.y), (160.0, 155.0));
    assert_eq!(texts[0].2, 18.0);
    assert_eq!(texts[1].0, "(2686 bp)");
    assert_eq!((texts[1].1.x, texts[1].1.y), (160.0, 160.0));
    assert_eq!(texts[1].2, 14.0);
}

#[test]
fn mask_erases_all_feature_color_from_the_interior() {
    let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE);
    render(&mut pixmap, &puc19(), &MapStyle::default()).unwrap();

    let feature_colors = [
        RGB8::new(65, 105, 225),
        RGB8::new(165, 42, 42),
        RGB8::new(143, 188, 143),
        RGB8::new(75, 0, 130),
    ];
    for y in 0..CANVAS_SIZE {
        for x in 0..CANVAS_SIZE {
            let dx = x as f64 + 0.5 - CENTER.x;
            let dy = y as f64 + 0.5 - CENTER.y;
            if (dx * dx + dy * dy).sqrt() <= 145.0 {
                let c = pixmap.get(x, y);
                assert!(
                    !feature_colors.contains(&c),
                    "feature color {c:?} leaked inside the mask at ({x},{y})"
                );
            }
        }
    }
}

#[test]
fn gene_wedge_is_royalblue_in_its_quadrant() {
    let mut p = Plasmid::new("pTest", "A".repeat(1000));
    p.add_feature(Feature::new("gfp", FeatureKind::Gene, 0, 250));

    let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE);
    render(&mut pixmap, &p, &MapStyle::default()).unwrap();

    // Mid-span, mid-band: angle pi/4 at radius 150 (y-down frame).
    let x = (CENTER.x + 150.0 * (PI / 4.0).cos()) as usize;
    let y = (CENTER.y + 150.0 * (PI / 4.0).sin()) as usize;
    assert_eq!(pixmap.get(x, y), RGB8::new(65, 105, 225));

    // The opposite quadrant stays unpainted band (white outside the ring).
    let x = (CENTER.x - 153.0 * (PI / 4.0).cos()) as usize;
    let y = (CENTER.y - 153.0 * (PI / 4.0).sin()) as usize;
    assert_eq!(pixmap.get(x, y), RGB8::new(255, 255, 255));
}

#[test]
fn svg_render_contains_expected_elements() {
    let mut svg = SvgSurface::new(CANVAS_SIZE, CANVAS_SIZE);
    render(&mut svg, &puc19(), &MapStyle::default()).unwrap();
    let doc = svg.finish();

    assert!(doc.contains("stroke-width=\"3.00\""), "backbone stroke");
    assert!(doc.contains("fill=\"#4169e1\""), "gene wedge color");
    assert!(doc.contains(">pUC19</text>"), "name label");
    assert!(doc.contains(">(2686 bp)</text>"), "size label");
    // Mask disk at radius 145.
    assert!(doc.contains("r=\"145.00\" fill=\"#ffffff\""));
}
