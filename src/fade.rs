//! Tick opacity policies.
//!
//! Two fades ship with the ruler. The legacy index-based "wave" fade darkens
//! ticks by how far their index sits from the current progress value, with an
//! extra cut on the side opposite the scroll direction. The distance fade that
//! replaced it ignores indices entirely and fades each tick by how far its
//! final on-screen position is from the view center, which stays continuous
//! while dragging instead of stepping whenever progress crosses an integer.

use crate::constants::MAX_ALPHA;

/// Which opacity policy the ruler applies to its ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeStyle {
    /// Fade by tick index relative to truncated progress (legacy wave fade).
    Indexed,
    /// Fade by on-screen distance from the view center.
    #[default]
    Distance,
}

/// Alpha for a tick whose center lands at `position` in a view `view_width`
/// wide. Ticks outside the view are invisible; inside it, alpha falls off
/// linearly with distance from the horizontal center, `divisor` pixels per
/// alpha step.
pub fn distance_alpha(position: f64, view_width: f64, divisor: u32) -> u8 {
    if position < 0.0 || position > view_width {
        return 0;
    }
    if divisor == 0 {
        // A zero divisor would divide by zero; render with no fade instead.
        return MAX_ALPHA as u8;
    }
    let falloff = (view_width / 2.0 - position.abs()).abs() / divisor as f64;
    (MAX_ALPHA as f64 - falloff).clamp(0.0, MAX_ALPHA as f64) as u8
}

/// Alpha for the tick at signed `index` (`+i` right of center, `-i` left)
/// under the legacy wave fade. `progress` is truncated to an integer before
/// use; `divisor` scales every falloff term.
pub fn indexed_alpha(index: i64, progress: f64, divisor: u32) -> u8 {
    let p = progress as i64;
    let a = p.abs();
    let i = index.abs();
    let divisor = i64::from(divisor);

    let mut alpha = (i64::from(MAX_ALPHA) - (i - a).abs() * divisor).clamp(0, i64::from(MAX_ALPHA));

    // Ticks on the side opposite the scroll direction darken further.
    if index != 0 && index.signum() != p.signum() && p != 0 {
        let cut = if i < a {
            (a * i - i) * divisor
        } else {
            a * divisor * 2
        };
        alpha = (alpha - cut).max(0);
    }

    alpha as u8
}
