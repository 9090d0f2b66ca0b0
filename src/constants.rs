//! Sizing and styling defaults for the ruler.

use floem::peniko::Color;

/// Ticks rendered on each side of center.
pub const DEFAULT_TICK_COUNT: u32 = 25;

/// Gap between adjacent tick centers, excluding tick width.
pub const DEFAULT_TICK_SPACING: f64 = 75.0;

/// Width of each tick rectangle.
pub const DEFAULT_TICK_WIDTH: f64 = 5.0;

/// Fade falloff steepness. Multiplier for the indexed fade,
/// divisor for the distance fade.
pub const DEFAULT_FADE_DIVISOR: u32 = 35;

/// Default tick color.
pub const DEFAULT_TICK_COLOR: Color = Color::rgba8(128, 128, 128, 255);

/// Default center dot color.
pub const DEFAULT_DOT_COLOR: Color = Color::rgba8(0, 0, 0, 255);

/// Center dot radius; values at or below zero disable the dot.
pub const DEFAULT_DOT_RADIUS: f64 = 6.0;

/// Default widget height.
pub const RULER_HEIGHT: f32 = 120.0;

/// Fully opaque tick alpha.
pub const MAX_ALPHA: i32 = 255;
