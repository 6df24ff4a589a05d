//! Sketch engine state and the stroke capture state machine.

use crate::canvas::{Color, Paint, Surface, SurfaceError, Tool};
use crate::config::Config;
use crate::history::History;
use crate::input::events::Event;

/// Stroke capture state machine.
///
/// Tracks whether the user is idle or actively laying down segments.
/// Transitions occur on contact start/move/end events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// No contact tracked - waiting for input
    Idle,
    /// A stroke is in progress (contact held down)
    Drawing {
        /// Last rasterized X position; start of the next segment
        last_x: f64,
        /// Last rasterized Y position; start of the next segment
        last_y: f64,
    },
}

/// Main engine state for one sketching session.
///
/// Owns the raster surface, the snapshot history, and the current tool
/// selections, and processes every embedder event to keep them consistent.
/// There are no ambient globals: embedders hold exactly one of these per
/// drawing surface.
pub struct SketchState {
    /// The raster surface strokes are rendered onto
    pub surface: Surface,
    /// Snapshot history backing the undo trigger
    pub history: History,
    /// Currently selected tool (pushed by the toolbar collaborator)
    pub current_tool: Tool,
    /// Currently selected stroke color
    pub current_color: Color,
    /// Currently selected stroke width in pixels
    pub current_width: f64,
    /// Whether the embedder needs to present the surface again
    pub needs_redraw: bool,
    /// Background color the eraser restores
    background: Color,
    /// Current stroke capture state
    pub(super) state: StrokeState,
}

impl SketchState {
    /// Creates an engine sized to the viewport, with defaults from config.
    pub fn new(width: i32, height: i32, config: &Config) -> Result<Self, SurfaceError> {
        Self::with_defaults(
            width,
            height,
            config.drawing.default_tool,
            config.drawing.default_color.to_color(),
            config.drawing.default_width,
            config.drawing.background.to_color(),
            config.history.max_snapshots,
        )
    }

    /// Creates an engine with explicit defaults.
    ///
    /// # Arguments
    /// * `width`, `height` - Initial viewport dimensions in pixels
    /// * `tool` - Initially selected tool
    /// * `color` - Initial stroke color
    /// * `stroke_width` - Initial stroke width in pixels
    /// * `background` - Background color the eraser restores
    /// * `max_snapshots` - History capacity bound (0 = unlimited)
    pub fn with_defaults(
        width: i32,
        height: i32,
        tool: Tool,
        color: Color,
        stroke_width: f64,
        background: Color,
        max_snapshots: usize,
    ) -> Result<Self, SurfaceError> {
        Ok(Self {
            surface: Surface::new(width, height)?,
            history: History::with_limit(max_snapshots),
            current_tool: tool,
            current_color: color,
            current_width: stroke_width,
            needs_redraw: true,
            background,
            state: StrokeState::Idle,
        })
    }

    /// Processes one embedder event.
    ///
    /// Convenience dispatcher over the individual handlers for embedders
    /// that forward a single event stream.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::ContactStart(contacts) => self.on_contact_start(&contacts),
            Event::ContactMove(contacts) => self.on_contact_move(&contacts),
            Event::ContactEnd => self.on_contact_end(),
            Event::Clear => self.clear(),
            Event::Undo => self.undo(),
            Event::Resized { width, height } => self.on_resized(width, height),
            Event::SelectTool(tool) => self.select_tool(tool),
            Event::SelectColor(color) => self.select_color(color),
            Event::SelectWidth(width) => self.select_width(width),
        }
    }

    /// Current stroke capture state.
    pub fn stroke_state(&self) -> &StrokeState {
        &self.state
    }

    /// Whether a stroke is currently in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Background color the eraser restores.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Resolves the paint for the selections active right now.
    ///
    /// Looked up per segment, not per stroke: switching tool, color, or
    /// width mid-stroke restyles only the segments drawn afterwards.
    pub(super) fn current_paint(&self) -> Paint {
        Paint::resolve(
            self.current_tool,
            self.current_color,
            self.current_width,
            self.background,
        )
    }
}
