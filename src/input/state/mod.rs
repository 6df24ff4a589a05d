mod actions;
mod contact;
mod core;

pub use core::{SketchState, StrokeState};
