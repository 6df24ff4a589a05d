use log::{debug, error, warn};

use crate::canvas::paint::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
use crate::canvas::{Color, Tool};

use super::SketchState;

impl SketchState {
    /// Clears the surface and records the blank state as a snapshot.
    ///
    /// Repeated clears keep appending blank snapshots; each one is a real
    /// undo step.
    pub fn clear(&mut self) {
        if let Err(err) = self.surface.clear() {
            error!("failed to clear surface: {err}");
            return;
        }
        self.needs_redraw = true;
        if let Err(err) = self.history.record(&self.surface) {
            error!("failed to record clear snapshot: {err}");
        }
    }

    /// Steps the history back one snapshot.
    ///
    /// A failed restore leaves the surface and cursor untouched; the
    /// drawing simply stays as it is.
    pub fn undo(&mut self) {
        match self.history.undo(&mut self.surface) {
            Ok(()) => self.needs_redraw = true,
            Err(err) => warn!("undo failed, surface left unchanged: {err}"),
        }
    }

    /// Reacts to a viewport size change.
    ///
    /// The surface is reallocated blank at the new dimensions and the
    /// snapshot at the cursor (if any) is redrawn onto it so the visible
    /// drawing survives the resize.
    pub fn on_resized(&mut self, width: i32, height: i32) {
        if let Err(err) = self.surface.resize(width, height) {
            error!("failed to resize surface to {width}x{height}: {err}");
            return;
        }
        if let Err(err) = self.history.restore_after_resize(&mut self.surface) {
            warn!("could not restore drawing after resize: {err}");
        }
        self.needs_redraw = true;
    }

    /// Updates the tool selection.
    ///
    /// Takes effect from the next segment on, including mid-stroke.
    pub fn select_tool(&mut self, tool: Tool) {
        self.current_tool = tool;
    }

    /// Updates the color selection.
    pub fn select_color(&mut self, color: Color) {
        self.current_color = color;
    }

    /// Updates the stroke width selection, clamped to the valid range.
    pub fn select_width(&mut self, width: f64) {
        let clamped = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if clamped != width {
            debug!("stroke width {width} clamped to {clamped}");
        }
        self.current_width = clamped;
    }
}
