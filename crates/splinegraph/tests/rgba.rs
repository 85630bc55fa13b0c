// File: crates/splinegraph/tests/rgba.rs
// Purpose: Validate RGBA cache buffer shape and transparency semantics.

use std::sync::Arc;

use skia_safe as skia;
use splinegraph::{ChartSurface, Curve, CurveStyle, GradientDirection, Insets, XY};

#[test]
fn blank_surface_is_fully_transparent() {
    let mut surface = ChartSurface::new(Insets::default());
    surface.resize(64, 32).expect("resize");
    surface.set_curves(Vec::new()).expect("set curves");

    let (px, w, h, stride) = surface.render_to_rgba8().expect("rgba render");
    assert_eq!((w, h), (64, 32));
    assert_eq!(stride, 64 * 4);
    assert_eq!(px.len(), 64 * 32 * 4);
    assert!(
        px.iter().skip(3).step_by(4).all(|&a| a == 0),
        "no curves should leave every pixel transparent"
    );
}

#[test]
fn empty_sample_curve_draws_nothing() {
    let mut surface = ChartSurface::new(Insets::default());
    surface.resize(64, 32).expect("resize");
    surface
        .set_curves(vec![Arc::new(Curve::new(CurveStyle::stroke(
            skia::Color::from_argb(255, 64, 160, 255),
        )))])
        .expect("set curves");

    let (px, ..) = surface.render_to_rgba8().expect("rgba render");
    assert!(px.iter().skip(3).step_by(4).all(|&a| a == 0));
}

#[test]
fn stroke_marks_pixels() {
    let mut surface = ChartSurface::new(Insets::default());
    surface.resize(64, 32).expect("resize");
    surface
        .set_curves(vec![Arc::new(Curve::with_data(
            CurveStyle::stroke(skia::Color::from_argb(255, 64, 160, 255)),
            vec![XY::new(0.0, 0.0), XY::new(1.0, 2.0), XY::new(2.0, 1.0)],
        ))])
        .expect("set curves");

    let (px, ..) = surface.render_to_rgba8().expect("rgba render");
    assert!(
        px.iter().skip(3).step_by(4).any(|&a| a != 0),
        "a stroked curve should touch some pixels"
    );
}

#[test]
fn markers_at_the_bottom_padding_edge_are_skipped() {
    // 64x48 viewport, 16px bottom padding: the drawable region is 32 rows.
    // The minimum sample maps onto the padding boundary (row 32), so its
    // marker must not be drawn; the maxima sit at the top and keep theirs.
    let mut surface = ChartSurface::new(Insets::new(0, 0, 16, 0));
    surface.resize(64, 48).expect("resize");
    surface
        .set_curves(vec![Arc::new(Curve::with_data(
            CurveStyle::stroke(skia::Color::from_argb(255, 64, 160, 255))
                .with_stroke_width(2.0)
                .with_points(skia::Color::from_argb(255, 255, 255, 255), 12.0, 0.0),
            vec![XY::new(0.0, 10.0), XY::new(1.0, 0.0), XY::new(2.0, 10.0)],
        ))])
        .expect("set curves");

    let (px, w, _, stride) = surface.render_to_rgba8().expect("rgba render");
    assert_eq!(w, 64);
    let alpha = |x: usize, y: usize| px[y * stride + x * 4 + 3];

    // A 12px marker centered on (32, 32) would reach down to row 38; with the
    // boundary skip the band under the curve's dip stays untouched.
    for y in 36..40 {
        for x in 28..37 {
            assert_eq!(alpha(x, y), 0, "marker leaked below the padding at ({x}, {y})");
        }
    }

    // The marker above the boundary is drawn.
    assert_ne!(alpha(1, 1), 0, "marker above the boundary should be visible");
}

#[test]
fn vertical_gradient_fill_renders() {
    let mut surface = ChartSurface::new(Insets::uniform(4));
    surface.resize(64, 48).expect("resize");
    surface
        .set_curves(vec![Arc::new(Curve::with_data(
            CurveStyle::fill(skia::Color::from_argb(200, 220, 80, 80)).with_gradient(
                skia::Color::from_argb(200, 40, 200, 120),
                GradientDirection::Vertical,
            ),
            vec![XY::new(0.0, 1.0), XY::new(1.0, 3.0), XY::new(2.0, 2.0)],
        ))])
        .expect("set curves");

    let (px, ..) = surface.render_to_rgba8().expect("rgba render");
    assert!(px.iter().skip(3).step_by(4).any(|&a| a != 0));
}
