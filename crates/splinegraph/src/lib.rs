// File: crates/splinegraph/src/lib.rs
// Summary: Core library entry point; exports public API for curve building and surface rendering.

pub mod curve;
pub mod spline;
pub mod style;
pub mod surface;
pub mod types;

pub use curve::Curve;
pub use spline::{MonotoneSpline, SplineError};
pub use style::{CurveStyle, Gradient, GradientDirection, PathMode};
pub use surface::{ChartSurface, GraphError};
pub use types::{AlignedPoint, Insets, XY};
