//! Ruler configuration.
//!
//! `RulerConfig` is the typed form of whatever declarative source the host
//! loads it from (markup attributes, a settings file, hard-coded values).
//! Every field has a default, so hosts override only what they care about.

use floem::peniko::Color;

use crate::constants;
use crate::fade::FadeStyle;

/// Configuration for a [`RulerPicker`](crate::RulerPicker).
///
/// Seeded once at construction, and optionally replaced at runtime through the
/// config signal. Replacing it goes through the same per-field setters as the
/// direct API, so changing a geometry field resets progress to zero while
/// color changes repaint in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerConfig {
    /// Ticks on each side of center.
    pub tick_count: u32,
    /// Pixel gap between adjacent tick centers, excluding tick width.
    pub tick_spacing: f64,
    /// Pixel width of each tick rectangle.
    pub tick_width: f64,
    /// Tick paint color; per-tick alpha is substituted at draw time.
    pub tick_color: Color,
    /// Center dot color.
    pub dot_color: Color,
    /// Center dot radius; `<= 0.0` disables the dot.
    pub dot_radius: f64,
    /// Fade falloff steepness (see [`FadeStyle`]).
    pub fade_divisor: u32,
    /// Which opacity policy to apply.
    pub fade: FadeStyle,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            tick_count: constants::DEFAULT_TICK_COUNT,
            tick_spacing: constants::DEFAULT_TICK_SPACING,
            tick_width: constants::DEFAULT_TICK_WIDTH,
            tick_color: constants::DEFAULT_TICK_COLOR,
            dot_color: constants::DEFAULT_DOT_COLOR,
            dot_radius: constants::DEFAULT_DOT_RADIUS,
            fade_divisor: constants::DEFAULT_FADE_DIVISOR,
            fade: FadeStyle::Distance,
        }
    }
}
