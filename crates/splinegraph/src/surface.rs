// File: crates/splinegraph/src/surface.rs
// Summary: Chart surface; owns curves and the backing raster cache, composites on demand.

use std::sync::Arc;

use anyhow::Result;
use skia_safe as skia;
use thiserror::Error;

use crate::curve::Curve;
use crate::types::Insets;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("failed to allocate {width}x{height} raster surface")]
    SurfaceAlloc { width: i32, height: i32 },
    #[error("viewport has no size; call resize first")]
    NoViewport,
    #[error("failed to read raster pixels")]
    ReadPixels,
    #[error("failed to encode PNG")]
    PngEncode,
}

/// Composites an ordered set of curves into one cached raster bitmap.
///
/// Curves are drawn in collection order, later curves atop earlier ones.
/// The cache is reallocated only when the viewport dimensions change or it
/// was released; every redraw otherwise reuses it in place. Per-frame
/// repaints are a plain blit of the cache ([`ChartSurface::draw_to`]) and do
/// no geometry work.
pub struct ChartSurface {
    insets: Insets,
    curves: Vec<Arc<Curve>>,
    width: i32,
    height: i32,
    cache: Option<skia::Surface>,
}

impl ChartSurface {
    pub fn new(insets: Insets) -> Self {
        Self {
            insets,
            curves: Vec::new(),
            width: 0,
            height: 0,
            cache: None,
        }
    }

    pub fn insets(&self) -> &Insets {
        &self.insets
    }

    pub fn curves(&self) -> &[Arc<Curve>] {
        &self.curves
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Replace the full curve set, align each curve to the current viewport,
    /// and redraw the cache.
    pub fn set_curves(&mut self, curves: Vec<Arc<Curve>>) -> Result<()> {
        self.curves = curves;
        for curve in &self.curves {
            curve.align_to_viewport(self.width, self.height, &self.insets);
        }
        self.redraw()
    }

    /// Viewport size change: realign all curves and redraw the cache.
    /// Non-positive sizes are ignored; a zero-size layout pass is expected
    /// during normal UI flow.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        for curve in &self.curves {
            curve.align_to_viewport(width, height, &self.insets);
        }
        self.redraw()
    }

    /// Realign and redraw with unchanged curves and size, e.g. after a
    /// background thread replaced a curve's samples via `Curve::set_data`.
    pub fn refresh(&mut self) -> Result<()> {
        for curve in &self.curves {
            curve.align_to_viewport(self.width, self.height, &self.insets);
        }
        self.redraw()
    }

    fn redraw(&mut self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Ok(());
        }

        // Reuse the backing raster unless the dimensions changed or it was
        // released; only the mismatch case pays for an allocation.
        let reuse = self
            .cache
            .as_ref()
            .is_some_and(|s| s.width() == self.width && s.height() == self.height);
        if !reuse {
            let surface = skia::surfaces::raster_n32_premul((self.width, self.height)).ok_or(
                GraphError::SurfaceAlloc { width: self.width, height: self.height },
            )?;
            self.cache = Some(surface);
        }

        if let Some(surface) = self.cache.as_mut() {
            let canvas = surface.canvas();
            canvas.clear(skia::Color::TRANSPARENT);
            for curve in &self.curves {
                curve.draw(canvas, self.width, self.height, &self.insets);
            }
        }
        Ok(())
    }

    /// Blit the cached raster onto `canvas`. Cheap enough for every frame;
    /// does nothing until a cache exists.
    pub fn draw_to(&mut self, canvas: &skia::Canvas) {
        if let Some(image) = self.image() {
            canvas.draw_image(&image, (0, 0), None);
        }
    }

    /// Snapshot of the cached raster for host-side blitting.
    pub fn image(&mut self) -> Option<skia::Image> {
        self.cache.as_mut().map(|s| s.image_snapshot())
    }

    /// Release the backing raster (teardown). The next redraw reallocates.
    pub fn release(&mut self) {
        self.cache = None;
    }

    /// Copy the cached raster out as tightly packed RGBA8 (unpremultiplied).
    /// Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GraphError::NoViewport.into());
        }
        if self.cache.is_none() {
            self.redraw()?;
        }
        let (width, height) = (self.width, self.height);
        let surface = self.cache.as_mut().ok_or(GraphError::NoViewport)?;

        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.canvas().read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(GraphError::ReadPixels.into());
        }
        Ok((pixels, width, height, stride))
    }

    /// Encode the cached raster as PNG bytes.
    pub fn render_to_png_bytes(&mut self) -> Result<Vec<u8>> {
        if self.width <= 0 || self.height <= 0 {
            return Err(GraphError::NoViewport.into());
        }
        if self.cache.is_none() {
            self.redraw()?;
        }
        let image = self.image().ok_or(GraphError::NoViewport)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(GraphError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the cached raster to a PNG file, creating parent directories.
    pub fn render_to_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
