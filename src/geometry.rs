//! Per-frame draw list construction.
//!
//! [`build_frame`] is a pure function of the current [`RulerState`] and the
//! view size. It emits every tick as a ready-to-paint rectangle with its
//! opacity already baked into the color, plus the optional center dot. The
//! widget layer just walks the list in order; no paint object is mutated
//! across frames.

use floem::kurbo::{Circle, Rect};
use floem::peniko::Color;

use crate::fade::{self, FadeStyle};
use crate::model::RulerState;

/// One tick rectangle, with the fade alpha already applied to the color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPaint {
    pub rect: Rect,
    pub color: Color,
}

/// The center dot marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPaint {
    pub circle: Circle,
    pub color: Color,
}

/// Ordered draw list for one frame: ticks first, dot on top.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub ticks: Vec<TickPaint>,
    pub dot: Option<DotPaint>,
}

fn with_alpha(color: Color, alpha: u8) -> Color {
    Color::rgba8(color.r, color.g, color.b, alpha)
}

fn tick_alpha(state: &RulerState, index: i64, position: f64, view_width: f64) -> u8 {
    match state.fade() {
        FadeStyle::Distance => fade::distance_alpha(position, view_width, state.fade_divisor()),
        FadeStyle::Indexed => fade::indexed_alpha(index, state.progress(), state.fade_divisor()),
    }
}

/// Builds the draw list for a view of `width` x `height`.
///
/// For each index up to the tick count, a mirrored pair of ticks is emitted
/// (positive side first), centered `index * (spacing + tick width)` from the
/// view's horizontal center and shifted by the current drag offset. Ticks
/// span from the vertical midline down to the bottom edge. Index zero emits
/// two coincident center ticks, so a ruler with `tick_count` ticks per side
/// paints `2 * (tick_count + 1)` rectangles.
pub fn build_frame(state: &RulerState, width: f64, height: f64) -> Frame {
    let center = width / 2.0;
    let step = state.tick_spacing() + state.tick_width();
    let half_width = state.tick_width() / 2.0;
    let top = height / 2.0;

    let count = state.tick_count();
    let mut ticks = Vec::with_capacity(2 * (count as usize + 1));
    for i in 0..=count {
        for index in [i64::from(i), -i64::from(i)] {
            let x = center + index as f64 * step + state.offset();
            let alpha = tick_alpha(state, index, x, width);
            ticks.push(TickPaint {
                rect: Rect::new(x - half_width, top, x + half_width, height),
                color: with_alpha(state.tick_color(), alpha),
            });
        }
    }

    let dot = (state.dot_radius() > 0.0).then(|| DotPaint {
        circle: Circle::new((center, state.dot_radius()), state.dot_radius()),
        color: state.dot_color(),
    });

    Frame { ticks, dot }
}
