// File: crates/splinegraph/src/spline.rs
// Summary: Monotone cubic spline (Fritsch-Carlson) over strictly increasing x values.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SplineError {
    #[error("control points are empty")]
    Empty,
    #[error("x and y lengths differ ({x} vs {y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("x values must be strictly increasing at index {0}")]
    NonIncreasingX(usize),
}

/// Piecewise cubic Hermite interpolant that passes exactly through every
/// control point and never overshoots between neighbouring points.
///
/// Tangents follow the Fritsch-Carlson method: secant averages, flattened
/// where successive y values are equal or the secant changes sign, and
/// rescaled onto the radius-3 circle where the monotonicity constraint
/// would otherwise be violated.
#[derive(Clone, Debug)]
pub struct MonotoneSpline {
    x: Vec<f32>,
    y: Vec<f32>,
    m: Vec<f32>,
}

impl MonotoneSpline {
    /// Fit a spline through `(x[i], y[i])`. `x` must be strictly increasing.
    ///
    /// A single control point yields a constant interpolant.
    pub fn fit(x: &[f32], y: &[f32]) -> Result<Self, SplineError> {
        if x.len() != y.len() {
            return Err(SplineError::LengthMismatch { x: x.len(), y: y.len() });
        }
        let n = x.len();
        if n == 0 {
            return Err(SplineError::Empty);
        }
        if n == 1 {
            return Ok(Self { x: x.to_vec(), y: y.to_vec(), m: vec![0.0] });
        }

        // Slopes of the secant lines between successive points.
        let mut d = vec![0.0f32; n - 1];
        for i in 0..n - 1 {
            let h = x[i + 1] - x[i];
            if h <= 0.0 {
                return Err(SplineError::NonIncreasingX(i + 1));
            }
            d[i] = (y[i + 1] - y[i]) / h;
        }

        // Tangents start as the average of the secants.
        let mut m = vec![0.0f32; n];
        m[0] = d[0];
        for i in 1..n - 1 {
            m[i] = (d[i - 1] + d[i]) * 0.5;
        }
        m[n - 1] = d[n - 2];

        // Constrain the tangents so each segment stays within the range of
        // its endpoints.
        for i in 0..n - 1 {
            if d[i] == 0.0 {
                // successive y values are equal
                m[i] = 0.0;
                m[i + 1] = 0.0;
                continue;
            }
            let mut a = m[i] / d[i];
            let mut b = m[i + 1] / d[i];
            // A tangent opposing the secant marks a local extremum; flatten it.
            if a < 0.0 {
                m[i] = 0.0;
                a = 0.0;
            }
            if b < 0.0 {
                m[i + 1] = 0.0;
                b = 0.0;
            }
            let h = a.hypot(b);
            if h > 3.0 {
                let t = 3.0 / h;
                m[i] = t * a * d[i];
                m[i + 1] = t * b * d[i];
            }
        }

        Ok(Self { x: x.to_vec(), y: y.to_vec(), m })
    }

    /// Interpolate y = f(x), clamping x to the domain of the spline.
    /// Never returns NaN for a fitted spline; NaN input maps to the first knot.
    pub fn eval(&self, x: f32) -> f32 {
        let n = self.x.len();
        if x.is_nan() || n == 1 || x <= self.x[0] {
            return self.y[0];
        }
        if x >= self.x[n - 1] {
            return self.y[n - 1];
        }

        // Find the last knot with smaller x; in range due to the clamps above.
        let mut i = 0;
        while x >= self.x[i + 1] {
            i += 1;
            if x == self.x[i] {
                return self.y[i];
            }
        }

        // Cubic Hermite interpolation on [x[i], x[i + 1]].
        let h = self.x[i + 1] - self.x[i];
        let t = (x - self.x[i]) / h;
        (self.y[i] * (1.0 + 2.0 * t) + h * self.m[i] * t) * (1.0 - t) * (1.0 - t)
            + (self.y[i + 1] * (3.0 - 2.0 * t) + h * self.m[i + 1] * (t - 1.0)) * t * t
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
