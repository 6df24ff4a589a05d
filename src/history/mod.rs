//! Snapshot history and linear undo.
//!
//! After every completed stroke and every clear the engine captures a full
//! [`Snapshot`] of the surface and appends it here. The log is strictly
//! linear: appending while the cursor sits before the end discards the tail
//! (there is no redo), and undoing past the first entry bottoms out at a
//! blank surface rather than an error.

pub mod snapshot;

pub use snapshot::{Snapshot, SnapshotError};

use log::debug;

use crate::canvas::Surface;

/// Ordered log of surface snapshots with a cursor marking what is shown.
///
/// The cursor is `None` while nothing has been recorded; the blank starting
/// state is an implicit floor, not a stored record.
pub struct History {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
    /// Maximum number of retained snapshots (0 = unlimited)
    max_snapshots: usize,
}

impl History {
    /// Creates an empty, unbounded history.
    pub fn new() -> Self {
        Self::with_limit(0)
    }

    /// Creates an empty history retaining at most `max_snapshots` entries.
    ///
    /// When the bound is exceeded the oldest entries are dropped; undoing
    /// past them lands on the blank floor. 0 means unlimited.
    pub fn with_limit(max_snapshots: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            max_snapshots,
        }
    }

    /// Number of retained snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the snapshot currently shown, or `None` before the first
    /// record.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Captures the surface and appends it at the cursor.
    ///
    /// Every entry after the cursor is discarded first: once the user draws
    /// on top of an undone state, the undone tail is gone for good. Called
    /// exactly once per completed stroke and once per clear action.
    pub fn record(&mut self, surface: &Surface) -> Result<(), SnapshotError> {
        let entry = Snapshot::capture(surface)?;

        let insert_at = self.cursor.map_or(0, |step| step + 1);
        self.entries.truncate(insert_at);
        self.entries.push(entry);

        if self.max_snapshots > 0 && self.entries.len() > self.max_snapshots {
            let excess = self.entries.len() - self.max_snapshots;
            self.entries.drain(..excess);
            debug!("history cap {} reached, dropped {} oldest", self.max_snapshots, excess);
        }

        self.cursor = Some(self.entries.len() - 1);
        debug!(
            "recorded snapshot {} of {} ({} bytes)",
            self.entries.len() - 1,
            self.entries.len(),
            self.entries.last().map_or(0, Snapshot::byte_len),
        );
        Ok(())
    }

    /// Steps the cursor back one entry and applies it to the surface.
    ///
    /// At the floor (cursor on the first entry, or nothing recorded) the
    /// surface is cleared to blank and the cursor stays put. Repeated undo
    /// at the floor keeps yielding a blank surface.
    ///
    /// A decode failure leaves both the cursor and the surface in their
    /// pre-operation state.
    pub fn undo(&mut self, surface: &mut Surface) -> Result<(), SnapshotError> {
        match self.cursor {
            Some(step) if step > 0 => {
                self.entries[step - 1].apply(surface)?;
                self.cursor = Some(step - 1);
                debug!("undo restored snapshot {}", step - 1);
            }
            _ => {
                surface.clear()?;
                debug!("undo at floor, cleared surface");
            }
        }
        Ok(())
    }

    /// Redraws the snapshot at the cursor onto a freshly resized surface.
    ///
    /// With nothing recorded the surface is left blank. A decode failure
    /// leaves the surface blank (the resize already discarded the pixels)
    /// and is reported to the caller.
    pub fn restore_after_resize(&mut self, surface: &mut Surface) -> Result<(), SnapshotError> {
        if let Some(step) = self.cursor {
            self.entries[step].apply(surface)?;
            debug!("restored snapshot {} after resize", step);
        }
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
