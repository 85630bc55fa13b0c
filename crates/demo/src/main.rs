// File: crates/demo/src/main.rs
// Summary: Demo renders telemetry-style spline curves (gradient area + marker line) to PNGs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use skia_safe as skia;
use splinegraph::{ChartSurface, Curve, CurveStyle, GradientDirection, Insets, XY};

fn main() -> Result<()> {
    // Accept an x,y CSV path from the CLI or fall back to synthetic telemetry.
    let samples = match std::env::args().nth(1) {
        Some(raw) => load_xy_csv(Path::new(&raw))
            .with_context(|| format!("failed to load CSV '{raw}'"))?,
        None => synth_telemetry(48),
    };
    if samples.is_empty() {
        anyhow::bail!("no samples loaded; expecting x,y rows");
    }
    println!("Loaded {} samples", samples.len());

    let max = samples.iter().map(|p| p.y).fold(f32::MIN, f32::max);

    let mut surface = ChartSurface::new(Insets::new(24, 0, 0, 0));
    surface.resize(800, 320)?;

    // Filled gradient area and a stroked marker line sharing one vertical scale.
    let area = Arc::new(Curve::with_data(
        CurveStyle::fill(skia::Color::from_argb(160, 64, 160, 255)).with_gradient(
            skia::Color::from_argb(160, 40, 200, 120),
            GradientDirection::Horizontal,
        ),
        samples.clone(),
    ));
    area.set_max_y(Some(max * 1.2));

    let line = Arc::new(Curve::with_data(
        CurveStyle::stroke(skia::Color::from_argb(255, 255, 230, 70))
            .with_stroke_width(4.0)
            .with_points(skia::Color::from_argb(255, 255, 255, 255), 8.0, 4.0),
        samples,
    ));
    line.set_max_y(Some(max * 1.2));

    surface.set_curves(vec![area, line])?;

    let out = PathBuf::from("target/demo_out/telemetry.png");
    surface.render_to_png(&out)?;
    println!("Wrote {}", out.display());

    // Same shape with the vertical gradient direction for comparison.
    let vertical = Arc::new(Curve::with_data(
        CurveStyle::fill(skia::Color::from_argb(200, 220, 80, 80)).with_gradient(
            skia::Color::from_argb(40, 220, 80, 80),
            GradientDirection::Vertical,
        ),
        synth_telemetry(48),
    ));
    surface.set_curves(vec![vertical])?;
    let out_v = PathBuf::from("target/demo_out/telemetry_vertical.png");
    surface.render_to_png(&out_v)?;
    println!("Wrote {}", out_v.display());

    Ok(())
}

fn load_xy_csv(path: &Path) -> Result<Vec<XY>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut out = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }
        let (Ok(x), Ok(y)) = (record[0].parse::<f32>(), record[1].parse::<f32>()) else {
            continue; // skip header or malformed rows
        };
        out.push(XY::new(x, y));
    }
    Ok(out)
}

fn synth_telemetry(n: usize) -> Vec<XY> {
    (0..n)
        .map(|i| {
            let x = i as f32;
            let y = 55.0 + (x * 0.35).sin() * 25.0 + (x * 0.07).cos() * 10.0;
            XY::new(x, y)
        })
        .collect()
}
