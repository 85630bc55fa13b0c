// File: crates/splinegraph/src/curve.rs
// Summary: Curve path builder; maps data-space samples to a pixel-aligned spline curve,
// a dense per-column value table, and a drawable fill/stroke path.

use std::sync::{Mutex, MutexGuard, PoisonError};

use skia_safe as skia;

use crate::spline::MonotoneSpline;
use crate::style::{CurveStyle, GradientDirection, PathMode};
use crate::types::{AlignedPoint, Insets, XY};

// Collections are replaced wholesale under their locks, so a poisoned guard
// still holds a consistent value.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One smoothed series on a [`ChartSurface`](crate::ChartSurface).
///
/// Sample data may be replaced from any thread through a shared handle
/// (`Arc<Curve>`); alignment and drawing run on the surface's owner thread.
/// The sample list, aligned-point list, and per-column value table each carry
/// their own lock, and every writer replaces the whole collection at once, so
/// readers never observe a partial update.
pub struct Curve {
    style: CurveStyle,
    samples: Mutex<Vec<XY>>,
    aligned: Mutex<Vec<AlignedPoint>>,
    pixels: Mutex<Vec<AlignedPoint>>,
    spline: Mutex<Option<MonotoneSpline>>,
    max_y: Mutex<Option<f32>>,
    // Padding captured by the last completed alignment; value queries offset by it.
    insets: Mutex<Insets>,
}

impl Curve {
    pub fn new(style: CurveStyle) -> Self {
        Self {
            style,
            samples: Mutex::new(Vec::new()),
            aligned: Mutex::new(Vec::new()),
            pixels: Mutex::new(Vec::new()),
            spline: Mutex::new(None),
            max_y: Mutex::new(None),
            insets: Mutex::new(Insets::default()),
        }
    }

    pub fn with_data(style: CurveStyle, samples: Vec<XY>) -> Self {
        let curve = Self::new(style);
        curve.set_data(samples);
        curve
    }

    pub fn style(&self) -> &CurveStyle {
        &self.style
    }

    /// Replace the sample set wholesale. Takes effect at the next alignment.
    pub fn set_data(&self, samples: Vec<XY>) {
        *lock(&self.samples) = samples;
    }

    /// Override the vertical scale's maximum so several curves share one scale.
    /// `None` falls back to the sample maximum.
    pub fn set_max_y(&self, max: Option<f32>) {
        *lock(&self.max_y) = max;
    }

    pub fn sample_count(&self) -> usize {
        lock(&self.samples).len()
    }

    /// Length of the dense per-column value table (the viewport width at the
    /// last successful alignment, 0 before one).
    pub fn column_count(&self) -> usize {
        lock(&self.pixels).len()
    }

    /// Snapshot of the per-column pixel-y values.
    pub fn value_table(&self) -> Vec<i32> {
        lock(&self.pixels).iter().map(|p| p.y).collect()
    }

    /// Pixel-y value of the curve at screen column `x`, including the top
    /// padding of the last completed alignment. Negative columns read
    /// column 0; columns past the table report 0 ("no data").
    pub fn value_at_column(&self, x: i32) -> i32 {
        let pixels = lock(&self.pixels);
        let col = x.max(0) as usize;
        if col >= pixels.len() {
            return 0;
        }
        pixels[col].y + lock(&self.insets).top
    }

    /// True when the plotted quantity increases from column `x` to `x + 1`.
    /// Pixel y grows downward, so a rising value means the next column sits
    /// higher on screen. Out-of-range columns report false.
    pub fn is_rising_at(&self, x: i32) -> bool {
        let pixels = lock(&self.pixels);
        let col = x.max(0) as usize;
        if col + 1 >= pixels.len() {
            return false;
        }
        pixels[col].y > pixels[col + 1].y
    }

    /// Rebuild all pixel-space state for the given viewport: normalize the
    /// samples into the drawable region, fit the spline, resample it at every
    /// integer column, and derive the Bezier tangent offsets.
    ///
    /// A zero-size viewport is ignored (transient layout pass). An empty
    /// sample set clears the derived state so a following draw is blank.
    pub fn align_to_viewport(&self, width: i32, height: i32, insets: &Insets) {
        if width <= 0 || height <= 0 {
            return;
        }

        let graph_w = width - insets.left - insets.right;
        let graph_h = height - insets.top - insets.bottom;
        if graph_w <= 0 || graph_h <= 0 {
            return;
        }

        let aligned = {
            let samples = lock(&self.samples);
            if samples.is_empty() {
                drop(samples);
                lock(&self.aligned).clear();
                lock(&self.pixels).clear();
                *lock(&self.spline) = None;
                return;
            }

            let max_y = *lock(&self.max_y);
            let mut x_min = f32::MAX;
            let mut x_max = f32::MIN;
            let mut y_min = f32::MAX;
            let mut y_max = f32::MIN;
            for point in samples.iter() {
                x_min = x_min.min(point.x);
                x_max = x_max.max(point.x);
                y_min = y_min.min(point.y);
                if max_y.is_none() {
                    y_max = y_max.max(point.y);
                }
            }
            if let Some(max) = max_y {
                y_max = max;
            }

            samples
                .iter()
                .map(|point| {
                    let xp = fraction(point.x, x_min, x_max);
                    let yp = fraction(point.y, y_min, y_max);
                    AlignedPoint::new(
                        (xp * graph_w as f32) as i32,
                        (graph_h as f32 - graph_h as f32 * yp) as i32,
                    )
                })
                .collect::<Vec<_>>()
        };

        // Fit the spline over pixel-space x. Samples that collapse onto the
        // same column keep the last value so x stays strictly increasing.
        let mut xs: Vec<f32> = Vec::with_capacity(aligned.len());
        let mut ys: Vec<f32> = Vec::with_capacity(aligned.len());
        for point in &aligned {
            let px = point.x as f32;
            match xs.last() {
                Some(&last) if last == px => {
                    if let Some(y) = ys.last_mut() {
                        *y = point.y as f32;
                    }
                }
                _ => {
                    xs.push(px);
                    ys.push(point.y as f32);
                }
            }
        }
        let spline = match MonotoneSpline::fit(&xs, &ys) {
            Ok(spline) => spline,
            Err(_) => {
                // Unordered input; leave nothing stale to draw.
                lock(&self.aligned).clear();
                lock(&self.pixels).clear();
                *lock(&self.spline) = None;
                return;
            }
        };

        // Dense resample, one entry per integer column across the full width.
        let mut dense: Vec<AlignedPoint> = (0..width)
            .map(|i| AlignedPoint::new(i, spline.eval(i as f32) as i32))
            .collect();

        // Catmull-Rom style control offsets: one third of the neighbour delta,
        // endpoints from their single neighbour.
        let n = dense.len();
        for i in 0..n {
            let (dx, dy) = if n < 2 {
                (0, 0)
            } else if i == 0 {
                let next = dense[1];
                ((next.x - dense[0].x) / 3, (next.y - dense[0].y) / 3)
            } else if i == n - 1 {
                let prev = dense[i - 1];
                ((dense[i].x - prev.x) / 3, (dense[i].y - prev.y) / 3)
            } else {
                let prev = dense[i - 1];
                let next = dense[i + 1];
                ((next.x - prev.x) / 3, (next.y - prev.y) / 3)
            };
            dense[i].dx = dx;
            dense[i].dy = dy;
        }

        *lock(&self.aligned) = aligned;
        *lock(&self.pixels) = dense;
        *lock(&self.spline) = Some(spline);
        // Committed last so queries pair the padding with the matching table.
        *lock(&self.insets) = *insets;
    }

    /// Draw the curve (and optional markers) onto a cache canvas. No-op until
    /// an alignment has fitted a spline.
    pub(crate) fn draw(&self, canvas: &skia::Canvas, width: i32, height: i32, insets: &Insets) {
        if lock(&self.spline).is_none() {
            return;
        }

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(self.style.color);
        paint.set_stroke_width(self.style.stroke_width);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_style(match self.style.mode {
            PathMode::Fill => skia::paint::Style::Fill,
            PathMode::Stroke => skia::paint::Style::Stroke,
        });
        if let Some(gradient) = &self.style.gradient {
            let (from, to) = match gradient.direction {
                GradientDirection::Horizontal => (
                    skia::Point::new(insets.left as f32, 0.0),
                    skia::Point::new((width - insets.right) as f32, 0.0),
                ),
                GradientDirection::Vertical => (
                    skia::Point::new(0.0, insets.top as f32),
                    skia::Point::new(0.0, (height - insets.bottom) as f32),
                ),
            };
            paint.set_shader(skia::gradient_shader::linear(
                (from, to),
                [self.style.color, gradient.color2].as_ref(),
                None,
                skia::TileMode::Clamp,
                None,
                None,
            ));
        }

        // Build the path from the dense samples, then draw with the lock
        // released.
        let path = {
            let pixels = lock(&self.pixels);
            if pixels.is_empty() {
                return;
            }
            let left = insets.left as f32;
            let top = insets.top as f32;
            let bottom_y = (height + insets.top) as f32;

            let mut path = skia::Path::new();
            // Start below the drawable region so a filled path closes cleanly.
            path.move_to((left, bottom_y));
            let mut prev: Option<AlignedPoint> = None;
            for point in pixels.iter().copied() {
                match prev {
                    None => {
                        path.line_to((point.x as f32 + left, point.y as f32 + top));
                    }
                    Some(p) => {
                        path.cubic_to(
                            ((p.x + p.dx) as f32 + left, (p.y + p.dy) as f32 + top),
                            (
                                (point.x - point.dx) as f32 + left,
                                (point.y - point.dy) as f32 + top,
                            ),
                            (point.x as f32 + left, point.y as f32 + top),
                        );
                    }
                }
                prev = Some(point);
            }
            // And end at the bottom under the last column.
            if let Some(last) = prev {
                path.line_to((last.x as f32 + left, bottom_y));
            }
            path
        };
        canvas.draw_path(&path, &paint);

        if self.style.show_points {
            self.draw_points(canvas, height, insets);
        }
    }

    fn draw_points(&self, canvas: &skia::Canvas, height: i32, insets: &Insets) {
        let size = if self.style.point_size > 0.0 {
            self.style.point_size
        } else {
            self.style.stroke_width
        };

        // The base circle punches a transparent ring through the curve so the
        // marker reads against the fill.
        let mut base = skia::Paint::default();
        base.set_anti_alias(true);
        base.set_color(skia::Color::TRANSPARENT);
        base.set_blend_mode(skia::BlendMode::Clear);
        base.set_stroke_width(size + self.style.point_padding);
        base.set_style(skia::paint::Style::StrokeAndFill);

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(self.style.point_color);
        dot.set_stroke_width(size);
        dot.set_style(skia::paint::Style::StrokeAndFill);

        let aligned = lock(&self.aligned);
        for point in aligned.iter() {
            let cy = point.y + insets.top;
            // Markers at or past the bottom padding edge are skipped.
            if cy >= height - insets.bottom {
                continue;
            }
            let center = ((point.x + insets.left) as f32, cy as f32);
            canvas.draw_circle(center, base.stroke_width() / 2.0, &base);
            canvas.draw_circle(center, dot.stroke_width() / 2.0, &dot);
        }
    }
}

// Normalized position of `v` within [min, max]. A collapsed range reads as
// "all samples equal" and maps to the middle rather than dividing by zero.
fn fraction(v: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span <= 0.0 {
        0.5
    } else {
        (v - min) / span
    }
}
