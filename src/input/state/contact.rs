use log::{debug, error};

use crate::input::events::{Contact, topmost_contact};

use super::{SketchState, StrokeState};

impl SketchState {
    /// Processes a contact start event (mouse press or touch start).
    ///
    /// Records the chosen contact's position as the last-known point and
    /// enters the `Drawing` state. A start with no usable contact is
    /// dropped; a start while already drawing is ignored.
    pub fn on_contact_start(&mut self, contacts: &[Contact]) {
        if !matches!(self.state, StrokeState::Idle) {
            return;
        }
        let Some(contact) = topmost_contact(contacts) else {
            debug!("contact start carried no usable contact, ignoring");
            return;
        };
        self.state = StrokeState::Drawing {
            last_x: contact.x,
            last_y: contact.y,
        };
    }

    /// Processes a contact move event.
    ///
    /// Strokes one segment from the last-known point to the chosen contact
    /// with the paint resolved at this instant, then advances the
    /// last-known point. A move while not drawing, or with no usable
    /// contact, is a no-op.
    pub fn on_contact_move(&mut self, contacts: &[Contact]) {
        let StrokeState::Drawing { last_x, last_y } = self.state else {
            return;
        };
        let Some(contact) = topmost_contact(contacts) else {
            return;
        };

        let paint = self.current_paint();
        if let Err(err) = self
            .surface
            .stroke_segment(last_x, last_y, contact.x, contact.y, &paint)
        {
            error!("failed to rasterize stroke segment: {err}");
        }

        // The last-known point advances even when rasterization failed, so
        // one bad segment cannot wedge the rest of the stroke.
        self.state = StrokeState::Drawing {
            last_x: contact.x,
            last_y: contact.y,
        };
        self.needs_redraw = true;
    }

    /// Processes a contact end event (release or cancel).
    ///
    /// Finalizes the stroke and records exactly one history snapshot. An
    /// end while not drawing is a no-op and records nothing.
    pub fn on_contact_end(&mut self) {
        if !matches!(self.state, StrokeState::Drawing { .. }) {
            return;
        }
        self.state = StrokeState::Idle;
        if let Err(err) = self.history.record(&self.surface) {
            error!("failed to record stroke snapshot: {err}");
        }
    }
}
