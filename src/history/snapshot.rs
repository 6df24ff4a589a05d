//! Immutable raster snapshots of the drawing surface.

use log::trace;
use thiserror::Error;

use crate::canvas::{Surface, SurfaceError};

/// Errors raised while encoding or applying snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode surface snapshot: {0}")]
    Encode(cairo::IoError),

    #[error("failed to decode snapshot record: {0}")]
    Decode(cairo::IoError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// A full captured image of the drawing surface at one point in time.
///
/// Snapshots are encoded as PNG held in memory. They are immutable once
/// captured: history only ever appends, truncates, or re-applies them.
/// The codec never crosses a process boundary, so PNG is an internal
/// representation, not a compatibility surface.
#[derive(Debug, Clone)]
pub struct Snapshot {
    png: Vec<u8>,
}

impl Snapshot {
    /// Encodes the current surface contents into a new snapshot.
    pub fn capture(surface: &Surface) -> Result<Self, SnapshotError> {
        let image = surface.image();
        image.flush();
        let mut png = Vec::new();
        image
            .write_to_png(&mut png)
            .map_err(SnapshotError::Encode)?;
        trace!("captured {} byte snapshot", png.len());
        Ok(Self { png })
    }

    /// Decodes the snapshot and replaces the surface contents with it.
    ///
    /// Decoding happens before the surface is touched: a corrupt record
    /// leaves the surface exactly as it was.
    pub fn apply(&self, surface: &mut Surface) -> Result<(), SnapshotError> {
        let decoded = cairo::ImageSurface::create_from_png(&mut self.png.as_slice())
            .map_err(SnapshotError::Decode)?;
        surface.replace_with(&decoded)?;
        Ok(())
    }

    /// Size of the encoded record in bytes.
    pub fn byte_len(&self) -> usize {
        self.png.len()
    }

    #[cfg(test)]
    pub(crate) fn from_png_bytes(png: Vec<u8>) -> Self {
        Self { png }
    }
}
