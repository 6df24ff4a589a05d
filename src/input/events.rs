//! Typed input events for embedder-agnostic control flow.

use crate::canvas::{Color, Tool};

/// A single pointer or touch contact in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Horizontal position in pixels
    pub x: f64,
    /// Vertical position in pixels
    pub y: f64,
}

impl Contact {
    /// Creates a contact at the given position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Events the embedding environment feeds to the engine.
///
/// Backends map their native pointer, touch, and widget events to these
/// values for unified handling; the engine itself never talks to an event
/// loop. Contact events carry every simultaneously active contact the
/// source reports: the engine picks one (see [`topmost_contact`]) and an
/// empty list is an ignorable anomaly, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A contact went down (mouse press or touch start).
    ContactStart(Vec<Contact>),
    /// The active contacts moved.
    ContactMove(Vec<Contact>),
    /// The tracked contact lifted or was cancelled.
    ContactEnd,
    /// Clear trigger activation.
    Clear,
    /// Undo trigger activation.
    Undo,
    /// The viewport backing the surface changed size.
    Resized { width: i32, height: i32 },
    /// The tool selector changed.
    SelectTool(Tool),
    /// The color selector changed.
    SelectColor(Color),
    /// The stroke width selector changed.
    SelectWidth(f64),
}

/// Picks the topmost contact: the one with the smallest vertical coordinate.
///
/// Only a single contact point is tracked at a time; when a touch source
/// reports several, the topmost wins and the rest are ignored for that
/// event. The first contact wins ties.
pub fn topmost_contact(contacts: &[Contact]) -> Option<Contact> {
    let mut top: Option<Contact> = None;
    for contact in contacts {
        if top.map_or(true, |t| contact.y < t.y) {
            top = Some(*contact);
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topmost_contact_picks_smallest_y() {
        let contacts = [
            Contact::new(30.0, 200.0),
            Contact::new(80.0, 50.0),
            Contact::new(10.0, 120.0),
        ];
        assert_eq!(topmost_contact(&contacts), Some(Contact::new(80.0, 50.0)));
    }

    #[test]
    fn topmost_contact_first_wins_ties() {
        let contacts = [Contact::new(1.0, 40.0), Contact::new(2.0, 40.0)];
        assert_eq!(topmost_contact(&contacts), Some(Contact::new(1.0, 40.0)));
    }

    #[test]
    fn topmost_contact_of_empty_list_is_none() {
        assert_eq!(topmost_contact(&[]), None);
    }
}
