//! Input handling and the stroke capture state machine.
//!
//! This module translates embedder pointer/touch and trigger events into
//! drawing actions. It maintains the current tool selections, the raster
//! surface, the snapshot history, and the state machine tracking whether a
//! stroke is in progress.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Contact, Event};
pub use state::{SketchState, StrokeState};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use events::topmost_contact;
