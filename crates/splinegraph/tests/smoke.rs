// File: crates/splinegraph/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use std::sync::Arc;

use skia_safe as skia;
use splinegraph::{ChartSurface, Curve, CurveStyle, GradientDirection, Insets, XY};

#[test]
fn render_smoke_png() {
    let mut surface = ChartSurface::new(Insets::uniform(8));
    surface.resize(320, 160).expect("resize");

    let area = Arc::new(Curve::with_data(
        CurveStyle::fill(skia::Color::from_argb(160, 64, 160, 255)).with_gradient(
            skia::Color::from_argb(160, 40, 200, 120),
            GradientDirection::Horizontal,
        ),
        vec![
            XY::new(0.0, 0.0),
            XY::new(1.0, 2.0),
            XY::new(2.0, 1.0),
            XY::new(3.0, 3.5),
            XY::new(4.0, 2.5),
        ],
    ));
    let line = Arc::new(Curve::with_data(
        CurveStyle::stroke(skia::Color::from_argb(255, 255, 230, 70))
            .with_points(skia::Color::from_argb(255, 255, 255, 255), 6.0, 3.0),
        vec![XY::new(0.0, 1.0), XY::new(2.0, 3.0), XY::new(4.0, 2.0)],
    ));
    surface.set_curves(vec![area, line]).expect("set curves");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    surface.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API and that the bytes decode.
    let bytes = surface.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let decoded = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((decoded.width(), decoded.height()), (320, 160));
}

#[test]
fn render_before_resize_reports_no_viewport() {
    let mut surface = ChartSurface::new(Insets::default());
    assert!(surface.render_to_png_bytes().is_err());
    assert!(surface.image().is_none());
}

#[test]
fn release_then_render_reallocates() {
    let mut surface = ChartSurface::new(Insets::default());
    surface.resize(64, 64).expect("resize");
    surface
        .set_curves(vec![Arc::new(Curve::with_data(
            CurveStyle::stroke(skia::Color::from_argb(255, 64, 160, 255)),
            vec![XY::new(0.0, 0.0), XY::new(1.0, 1.0)],
        ))])
        .expect("set curves");

    surface.release();
    assert!(surface.image().is_none());
    // The next export allocates a fresh backing raster and redraws.
    let bytes = surface.render_to_png_bytes().expect("render after release");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
