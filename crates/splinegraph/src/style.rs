// File: crates/splinegraph/src/style.rs
// Summary: Curve styling: fill/stroke mode, gradient options, point markers.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathMode {
    Stroke,
    Fill,
}

/// Gradient axis across the drawable region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientDirection {
    Horizontal,
    Vertical,
}

/// Second gradient stop; the first stop is the curve's base color.
#[derive(Clone, Copy, Debug)]
pub struct Gradient {
    pub color2: skia::Color,
    pub direction: GradientDirection,
}

/// Resolved rendering style for one curve. One concrete record covers the
/// closed set of variants (stroked line, filled area, gradient, markers).
#[derive(Clone, Copy, Debug)]
pub struct CurveStyle {
    pub mode: PathMode,
    pub color: skia::Color,
    pub stroke_width: f32,
    pub gradient: Option<Gradient>,
    pub show_points: bool,
    pub point_color: skia::Color,
    /// Marker diameter in pixels; 0 falls back to the stroke width.
    pub point_size: f32,
    /// Width of the transparent ring punched out around each marker.
    pub point_padding: f32,
}

impl CurveStyle {
    /// Stroked line in a single color.
    pub fn stroke(color: skia::Color) -> Self {
        Self {
            mode: PathMode::Stroke,
            color,
            stroke_width: 3.0,
            gradient: None,
            show_points: false,
            point_color: color,
            point_size: 0.0,
            point_padding: 0.0,
        }
    }

    /// Filled area under the curve.
    pub fn fill(color: skia::Color) -> Self {
        Self {
            mode: PathMode::Fill,
            ..Self::stroke(color)
        }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_gradient(mut self, color2: skia::Color, direction: GradientDirection) -> Self {
        self.gradient = Some(Gradient { color2, direction });
        self
    }

    pub fn with_points(mut self, color: skia::Color, size: f32, padding: f32) -> Self {
        self.show_points = true;
        self.point_color = color;
        self.point_size = size;
        self.point_padding = padding;
        self
    }
}
