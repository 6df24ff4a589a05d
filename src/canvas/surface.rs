//! The raster surface strokes are rendered onto.

use cairo::{Context, Format, ImageSurface};
use log::debug;
use thiserror::Error;

use super::paint::Paint;
use super::render;

/// Errors raised by raster surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to allocate {width}x{height} raster surface: {source}")]
    Allocate {
        width: i32,
        height: i32,
        source: cairo::Error,
    },

    #[error("cairo drawing error: {0}")]
    Draw(#[from] cairo::Error),

    #[error("surface pixel data is unavailable: {0}")]
    Data(#[from] cairo::BorrowError),
}

/// A fixed-size ARGB raster canvas owned by the drawing engine.
///
/// The surface is mutated in place by stroke rendering and by history
/// restoration; between snapshots it is the only record of what has been
/// drawn. Dimensions track the embedder's viewport: [`Surface::resize`]
/// reallocates the backing store whenever the viewport changes.
pub struct Surface {
    image: ImageSurface,
    width: i32,
    height: i32,
}

impl Surface {
    /// Creates a blank surface at the given dimensions.
    ///
    /// Dimensions are clamped to at least 1x1; Cairo rejects degenerate
    /// surfaces and a zero-sized viewport has nothing to show anyway.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let width = width.max(1);
        let height = height.max(1);
        let image = ImageSurface::create(Format::ARgb32, width, height).map_err(|source| {
            SurfaceError::Allocate {
                width,
                height,
                source,
            }
        })?;
        Ok(Self {
            image,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Resets every pixel to full transparency.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let ctx = Context::new(&self.image)?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Strokes one line segment with the given paint.
    ///
    /// See [`render::stroke_segment`] for the rendering contract.
    pub fn stroke_segment(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        paint: &Paint,
    ) -> Result<(), SurfaceError> {
        let ctx = Context::new(&self.image)?;
        render::stroke_segment(&ctx, x0, y0, x1, y1, paint)?;
        Ok(())
    }

    /// Reallocates the surface blank at new dimensions.
    ///
    /// Previous content is discarded; callers that want to keep the visible
    /// drawing redraw it from history afterwards.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        let replacement = Self::new(width, height)?;
        debug!(
            "resized surface {}x{} -> {}x{}",
            self.width, self.height, replacement.width, replacement.height
        );
        *self = replacement;
        Ok(())
    }

    /// Clears the surface and paints `decoded` onto it at the origin.
    ///
    /// Content larger than the surface is cropped; smaller content leaves
    /// the remainder blank.
    pub(crate) fn replace_with(&mut self, decoded: &ImageSurface) -> Result<(), SurfaceError> {
        let ctx = Context::new(&self.image)?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        ctx.set_operator(cairo::Operator::Over);
        ctx.set_source_surface(decoded, 0.0, 0.0)?;
        ctx.paint()?;
        Ok(())
    }

    /// The backing Cairo image surface, for snapshot encoding.
    pub(crate) fn image(&self) -> &ImageSurface {
        &self.image
    }

    /// Samples the pixel at `(x, y)`.
    ///
    /// Returns `(r, g, b, a)` as stored (alpha-premultiplied, 0-255 per
    /// channel), or `None` when the coordinate is outside the surface.
    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<(u8, u8, u8, u8)>, SurfaceError> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Ok(None);
        }
        self.image.flush();
        let stride = self.image.stride();
        let data = self.image.data()?;
        let offset = (y * stride + x * 4) as usize;
        let value = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        let a = (value >> 24) as u8;
        let r = (value >> 16) as u8;
        let g = (value >> 8) as u8;
        let b = value as u8;
        Ok(Some((r, g, b, a)))
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&mut self) -> Result<bool, SurfaceError> {
        self.image.flush();
        let data = self.image.data()?;
        Ok(data.iter().all(|byte| *byte == 0))
    }
}
