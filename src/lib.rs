//! Freehand sketching engine with snapshot-based undo.
//!
//! A pointer-driven raster drawing surface with pen and eraser tools,
//! adjustable stroke size and color, and linear undo. Embedders create one
//! [`SketchState`] per surface and feed it typed [`input::Event`]s from
//! their pointer/touch stream and toolbar; the engine rasterizes strokes
//! immediately and keeps a snapshot history for the undo trigger. No event
//! loop, windowing system, or persistence is assumed.

pub mod canvas;
pub mod config;
pub mod history;
pub mod input;

pub use config::Config;
pub use input::SketchState;
