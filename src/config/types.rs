//! Configuration type definitions.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::canvas::color::BLACK;
use crate::canvas::{Color, Tool};

/// Drawing-related settings.
///
/// Controls the initial tool selections when an engine is created. The
/// embedder's toolbar changes these at runtime through selection events.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initially selected tool: "pen" or "eraser"
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Initial stroke color - a named color (red, green, blue, yellow,
    /// orange, pink, white, black), a `"#rrggbb"` hex string, or an RGB
    /// array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial stroke width in pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_width")]
    pub default_width: f64,

    /// Background color the eraser restores; same formats as `default_color`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_width: default_width(),
            background: default_background(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of retained snapshots; 0 keeps every snapshot.
    /// Each snapshot holds a full encoded image of the surface, so long
    /// sessions on large viewports may want a bound here.
    #[serde(default = "default_max_snapshots")]
    pub max_snapshots: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_snapshots: default_max_snapshots(),
        }
    }
}

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex string (the format color pickers emit)
/// default_color = "#ff8000"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color or `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Strings starting with `#` are parsed as hex; anything else is looked
    /// up as a color name. Unknown specifications fall back to black with a
    /// warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => {
                let parsed = if name.starts_with('#') {
                    Color::from_hex(name)
                } else {
                    Color::from_name(name)
                };
                parsed.unwrap_or_else(|| {
                    warn!("unknown color '{}', using black", name);
                    BLACK
                })
            }
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Tool {
    Tool::Pen
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_width() -> f64 {
    4.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_max_snapshots() -> usize {
    0
}
