//! Drawing tool selection and paint resolution.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Minimum stroke width in pixels.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Maximum stroke width in pixels.
pub const MAX_STROKE_WIDTH: f64 = 100.0;

/// Drawing tool selection.
///
/// The active tool determines how segments are composited onto the surface
/// while the user drags. The selection lives outside the stroke: switching
/// tools mid-stroke restyles every segment drawn from that point on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand drawing in the selected color (default)
    Pen,
    /// Removes previously drawn content back to the blank background
    Eraser,
}

/// Pixel blending rule applied when a segment is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Composite the segment color over existing content (pen).
    Over,
    /// Punch the covered pixels back to the blank background (eraser).
    Erase,
}

/// Resolved paint settings for a single segment.
///
/// Derived on demand from the current selections, never stored: each segment
/// of a stroke is styled with the settings active at the instant it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
    /// Blending rule for this segment
    pub mode: BlendMode,
}

impl Paint {
    /// Resolves the paint descriptor for the given tool selection.
    ///
    /// The eraser ignores the selected color: it always paints with the
    /// opaque background color under erase blending. The pen uses the
    /// selected color and composites over existing content.
    pub fn resolve(tool: Tool, color: Color, width: f64, background: Color) -> Self {
        match tool {
            Tool::Pen => Self {
                color,
                width,
                mode: BlendMode::Over,
            },
            Tool::Eraser => Self {
                color: background.opaque(),
                width,
                mode: BlendMode::Erase,
            },
        }
    }
}
