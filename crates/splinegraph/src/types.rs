// File: crates/splinegraph/src/types.rs
// Summary: Shared geometry types (data samples, aligned pixels, paddings).

/// Data-space sample point. Input unit for one curve.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct XY {
    pub x: f32,
    pub y: f32,
}

impl XY {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel-space point plus tangent offsets (dx, dy) used as Bezier control
/// point deltas when the curve path is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlignedPoint {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl AlignedPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y, dx: 0, dy: 0 }
    }
}

/// Screen paddings, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    /// Create new insets (top, right, bottom, left).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Same inset on all four sides.
    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i32 {
        self.left + self.right
    }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i32 {
        self.top + self.bottom
    }
}
