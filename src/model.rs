//! Ruler state and drag-to-progress mapping.
//!
//! `RulerState` owns everything the widget knows: geometry configuration, the
//! current horizontal offset of the tick row, the normalized progress derived
//! from it, and the scroll listener. The widget layer feeds it pointer deltas
//! and config changes; the geometry module reads it to build a draw list.
//!
//! Offset and progress stay in a fixed linear relation:
//! `progress = offset / max_left_offset * tick_count`. The degenerate
//! `tick_count == 0` configuration collapses both bounds to zero, in which
//! case progress is defined as zero rather than dividing by zero.

use floem::peniko::Color;

use crate::config::RulerConfig;
use crate::fade::FadeStyle;

/// The ruler's mutable state: configuration, drag offset, progress, and the
/// registered scroll listener.
///
/// Setters return `true` when the widget needs repainting, so hosts that embed
/// the state outside the bundled Floem view can drive their own invalidation.
pub struct RulerState {
    tick_count: u32,
    tick_spacing: f64,
    tick_width: f64,
    tick_color: Color,
    dot_color: Color,
    dot_radius: f64,
    fade_divisor: u32,
    fade: FadeStyle,
    offset: f64,
    progress: f64,
    max_left_offset: f64,
    max_right_offset: f64,
    on_scroll: Option<Box<dyn Fn(f64)>>,
}

impl RulerState {
    pub fn new(config: RulerConfig) -> Self {
        let mut state = Self {
            tick_count: config.tick_count,
            tick_spacing: config.tick_spacing.max(0.0),
            tick_width: config.tick_width.max(0.0),
            tick_color: config.tick_color,
            dot_color: config.dot_color,
            dot_radius: config.dot_radius.max(0.0),
            fade_divisor: config.fade_divisor,
            fade: config.fade,
            offset: 0.0,
            progress: 0.0,
            max_left_offset: 0.0,
            max_right_offset: 0.0,
            on_scroll: None,
        };
        state.calculate_max_offsets();
        state
    }

    /// Current normalized progress, roughly `-tick_count..=tick_count`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current horizontal translation of the tick row.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    pub fn tick_spacing(&self) -> f64 {
        self.tick_spacing
    }

    pub fn tick_width(&self) -> f64 {
        self.tick_width
    }

    pub fn tick_color(&self) -> Color {
        self.tick_color
    }

    pub fn dot_color(&self) -> Color {
        self.dot_color
    }

    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    pub fn fade_divisor(&self) -> u32 {
        self.fade_divisor
    }

    pub fn fade(&self) -> FadeStyle {
        self.fade
    }

    /// Leftmost (negative) offset the row may reach.
    pub fn max_left_offset(&self) -> f64 {
        self.max_left_offset
    }

    /// Rightmost (positive) offset the row may reach.
    pub fn max_right_offset(&self) -> f64 {
        self.max_right_offset
    }

    /// Registers the scroll listener, replacing any previous one.
    pub fn set_scroll_listener(&mut self, listener: impl Fn(f64) + 'static) {
        self.on_scroll = Some(Box::new(listener));
    }

    /// Applies a horizontal drag delta (`dx` positive when the pointer moved
    /// left), clamps the offset to its bounds, recomputes progress, and
    /// notifies the listener.
    pub fn scroll_by(&mut self, dx: f64) {
        if self.offset >= self.max_left_offset && self.offset <= self.max_right_offset {
            self.offset -= dx;
        }
        self.offset = self.offset.clamp(self.max_left_offset, self.max_right_offset);

        self.progress = if self.max_left_offset == 0.0 {
            0.0
        } else {
            self.offset / self.max_left_offset * f64::from(self.tick_count)
        };

        if let Some(on_scroll) = &self.on_scroll {
            on_scroll(self.progress);
        }
    }

    /// Jumps to an absolute progress value, deriving the matching offset.
    /// No-op when the value is unchanged.
    pub fn set_progress(&mut self, progress: f64) -> bool {
        if self.progress == progress {
            return false;
        }
        self.progress = progress;
        self.offset = if self.tick_count == 0 {
            0.0
        } else {
            progress / f64::from(self.tick_count) * self.max_left_offset
        };
        true
    }

    pub fn set_tick_count(&mut self, count: u32) -> bool {
        if self.tick_count == count {
            return false;
        }
        self.tick_count = count;
        self.calculate_max_offsets();
        self.set_progress(0.0);
        true
    }

    pub fn set_tick_spacing(&mut self, spacing: f64) -> bool {
        let spacing = spacing.max(0.0);
        if self.tick_spacing == spacing {
            return false;
        }
        self.tick_spacing = spacing;
        self.calculate_max_offsets();
        self.set_progress(0.0);
        true
    }

    pub fn set_tick_width(&mut self, width: f64) -> bool {
        let width = width.max(0.0);
        if self.tick_width == width {
            return false;
        }
        self.tick_width = width;
        self.calculate_max_offsets();
        self.set_progress(0.0);
        true
    }

    pub fn set_tick_color(&mut self, color: Color) -> bool {
        if self.tick_color == color {
            return false;
        }
        self.tick_color = color;
        true
    }

    pub fn set_dot_color(&mut self, color: Color) -> bool {
        if self.dot_color == color {
            return false;
        }
        self.dot_color = color;
        true
    }

    pub fn set_dot_radius(&mut self, radius: f64) -> bool {
        let radius = radius.max(0.0);
        if self.dot_radius == radius {
            return false;
        }
        self.dot_radius = radius;
        true
    }

    pub fn set_fade_divisor(&mut self, divisor: u32) -> bool {
        if self.fade_divisor == divisor {
            return false;
        }
        self.fade_divisor = divisor;
        true
    }

    pub fn set_fade(&mut self, fade: FadeStyle) -> bool {
        if self.fade == fade {
            return false;
        }
        self.fade = fade;
        true
    }

    /// Applies a full configuration through the individual setters, so each
    /// field keeps its own no-op and reset semantics. Returns `true` when any
    /// field changed.
    pub fn apply_config(&mut self, config: RulerConfig) -> bool {
        let mut changed = self.set_tick_count(config.tick_count);
        changed |= self.set_tick_spacing(config.tick_spacing);
        changed |= self.set_tick_width(config.tick_width);
        changed |= self.set_tick_color(config.tick_color);
        changed |= self.set_dot_color(config.dot_color);
        changed |= self.set_dot_radius(config.dot_radius);
        changed |= self.set_fade_divisor(config.fade_divisor);
        changed |= self.set_fade(config.fade);
        changed
    }

    fn calculate_max_offsets(&mut self) {
        let step = self.tick_spacing + self.tick_width;
        let right = (f64::from(self.tick_count) + 1.0) * step + self.tick_width / 2.0
            - (self.tick_spacing + 1.5 * self.tick_width);
        // Algebraically tick_count * step, but the expanded form can leave a
        // tiny negative float residue; floor it so the clamp range in
        // scroll_by stays ordered.
        self.max_right_offset = right.max(0.0);
        self.max_left_offset = -self.max_right_offset;
    }
}

impl Default for RulerState {
    fn default() -> Self {
        Self::new(RulerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use approx::assert_relative_eq;

    use super::*;

    fn state(count: u32, spacing: f64, width: f64) -> RulerState {
        RulerState::new(RulerConfig {
            tick_count: count,
            tick_spacing: spacing,
            tick_width: width,
            ..RulerConfig::default()
        })
    }

    #[test]
    fn default_config_bounds() {
        // 25 ticks, 75 px spacing, 5 px wide ticks.
        let state = RulerState::default();
        assert_relative_eq!(state.max_right_offset(), 2000.0);
        assert_relative_eq!(state.max_left_offset(), -2000.0);
    }

    #[test]
    fn bounds_are_symmetric() {
        for (count, spacing, width) in [(25, 75.0, 5.0), (0, 75.0, 5.0), (3, 0.0, 0.0), (100, 2.5, 1.0)] {
            let state = state(count, spacing, width);
            assert_eq!(state.max_left_offset(), -state.max_right_offset());
        }
    }

    #[test]
    fn set_progress_derives_offset() {
        let mut state = RulerState::default();
        assert!(state.set_progress(10.0));
        assert_relative_eq!(state.offset(), -800.0);
        assert_relative_eq!(state.progress(), 10.0);
    }

    #[test]
    fn set_progress_is_idempotent() {
        let mut state = RulerState::default();
        assert!(state.set_progress(10.0));
        assert!(!state.set_progress(10.0));
    }

    #[test]
    fn set_progress_with_zero_ticks_pins_offset() {
        let mut state = state(0, 75.0, 5.0);
        assert!(state.set_progress(5.0));
        assert_relative_eq!(state.offset(), 0.0);
    }

    #[test]
    fn scroll_updates_offset_and_progress() {
        let mut state = RulerState::default();
        state.scroll_by(200.0);
        assert_relative_eq!(state.offset(), -200.0);
        assert_relative_eq!(state.progress(), -200.0 / -2000.0 * 25.0);
    }

    #[test]
    fn scroll_clamps_to_bounds() {
        let mut state = RulerState::default();
        state.scroll_by(5000.0);
        assert_relative_eq!(state.offset(), -2000.0);
        assert_relative_eq!(state.progress(), 25.0);
        state.scroll_by(-10000.0);
        assert_relative_eq!(state.offset(), 2000.0);
        assert_relative_eq!(state.progress(), -25.0);
    }

    #[test]
    fn scroll_at_right_bound_only_moves_inward() {
        let mut state = RulerState::default();
        state.scroll_by(-5000.0);
        assert_relative_eq!(state.offset(), 2000.0);

        // Pushing further out of bounds is a no-op.
        state.scroll_by(-1.0);
        assert_relative_eq!(state.offset(), 2000.0);

        // Pulling back inward moves.
        state.scroll_by(1.0);
        assert_relative_eq!(state.offset(), 1999.0);
    }

    #[test]
    fn scroll_with_zero_ticks_reports_zero_progress() {
        let mut state = state(0, 75.0, 5.0);
        state.scroll_by(50.0);
        assert_relative_eq!(state.offset(), 0.0);
        assert_relative_eq!(state.progress(), 0.0);
    }

    #[test]
    fn scroll_recovers_from_out_of_range_offset() {
        let mut state = RulerState::default();
        // Jump past the bounds through set_progress, then drag.
        state.set_progress(30.0);
        assert!(state.offset() < state.max_left_offset());
        state.scroll_by(1.0);
        assert_relative_eq!(state.offset(), state.max_left_offset());
    }

    #[test]
    fn scroll_notifies_listener_with_progress() {
        let mut state = RulerState::default();
        let seen = Rc::new(Cell::new(f64::NAN));
        let seen2 = Rc::clone(&seen);
        state.set_scroll_listener(move |p| seen2.set(p));
        state.scroll_by(800.0);
        assert_relative_eq!(seen.get(), state.progress());
    }

    #[test]
    fn listener_registration_replaces_previous() {
        let mut state = RulerState::default();
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));
        let f = Rc::clone(&first);
        state.set_scroll_listener(move |_| f.set(f.get() + 1));
        let s = Rc::clone(&second);
        state.set_scroll_listener(move |_| s.set(s.get() + 1));
        state.scroll_by(10.0);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn geometry_setters_reset_progress_and_recompute_bounds() {
        let mut state = RulerState::default();
        state.set_progress(10.0);

        assert!(state.set_tick_count(10));
        assert_relative_eq!(state.progress(), 0.0);
        assert_relative_eq!(state.offset(), 0.0);
        assert_relative_eq!(state.max_right_offset(), 800.0); // 11*80 + 2.5 - 82.5

        state.set_progress(5.0);
        assert!(state.set_tick_spacing(35.0));
        assert_relative_eq!(state.progress(), 0.0);
        assert_relative_eq!(state.max_right_offset(), 400.0); // 11*40 + 2.5 - 42.5

        state.set_progress(5.0);
        assert!(state.set_tick_width(15.0));
        assert_relative_eq!(state.progress(), 0.0);
        assert_relative_eq!(state.max_right_offset(), 500.0); // 11*50 + 7.5 - 57.5
    }

    #[test]
    fn geometry_setters_are_noops_on_equal_values() {
        let mut state = RulerState::default();
        state.set_progress(10.0);
        assert!(!state.set_tick_count(25));
        assert!(!state.set_tick_spacing(75.0));
        assert!(!state.set_tick_width(5.0));
        // Equal-value setters must not reset progress.
        assert_relative_eq!(state.progress(), 10.0);
    }

    #[test]
    fn cosmetic_setters_leave_progress_and_bounds_alone() {
        let mut state = RulerState::default();
        state.set_progress(10.0);
        assert!(state.set_tick_color(Color::rgba8(1, 2, 3, 255)));
        assert!(state.set_dot_color(Color::rgba8(4, 5, 6, 255)));
        assert!(state.set_dot_radius(9.0));
        assert!(state.set_fade_divisor(12));
        assert!(state.set_fade(FadeStyle::Indexed));
        assert_relative_eq!(state.progress(), 10.0);
        assert_relative_eq!(state.max_right_offset(), 2000.0);

        assert!(!state.set_tick_color(Color::rgba8(1, 2, 3, 255)));
        assert!(!state.set_dot_radius(9.0));
    }

    #[test]
    fn float_residue_bounds_floor_to_zero() {
        // 57.3 + 0.3 is inexact in binary; the expanded bounds formula would
        // otherwise leave max_right_offset a hair below zero at count 0 and
        // invert the clamp range.
        let mut state = state(0, 57.3, 0.3);
        assert_eq!(state.max_right_offset(), 0.0);
        assert_eq!(state.max_left_offset(), 0.0);
        state.scroll_by(1.0);
        assert_eq!(state.offset(), 0.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn max_tick_count_does_not_overflow_bounds() {
        let state = state(u32::MAX, 1.0, 1.0);
        assert!(state.max_right_offset().is_finite());
        assert_relative_eq!(state.max_right_offset(), 8_589_934_590.0);
    }

    #[test]
    fn negative_dimensions_clamp_to_zero() {
        let state = RulerState::new(RulerConfig {
            tick_spacing: -10.0,
            tick_width: -2.0,
            dot_radius: -1.0,
            ..RulerConfig::default()
        });
        assert_eq!(state.tick_spacing(), 0.0);
        assert_eq!(state.tick_width(), 0.0);
        assert_eq!(state.dot_radius(), 0.0);
        assert_eq!(state.max_right_offset(), 0.0);
    }

    #[test]
    fn apply_config_reports_any_change() {
        let mut state = RulerState::default();
        assert!(!state.apply_config(RulerConfig::default()));
        assert!(state.apply_config(RulerConfig {
            tick_count: 10,
            ..RulerConfig::default()
        }));
    }
}
