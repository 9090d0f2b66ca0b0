//! The draggable ruler view.
//!
//! Renders a row of vertical ticks radiating from the view center, fading
//! with distance, plus a small dot marking the center. Dragging horizontally
//! slides the row between its bounds and writes the resulting progress value
//! to the host's signal. Unlike the 1D sliders elsewhere in the ecosystem,
//! pointer-down does not jump to the pointer; it only anchors the drag.

use floem::kurbo::Rect;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::config::RulerConfig;
use crate::constants;
use crate::geometry;
use crate::model::RulerState;

enum RulerUpdate {
    Progress(f64),
    Config(RulerConfig),
}

pub struct RulerPicker {
    id: ViewId,
    held: bool,
    last_x: f64,
    state: RulerState,
    size: floem::taffy::prelude::Size<f32>,
}

/// Creates a ruler picker with the default configuration.
///
/// The widget reads from and writes to `progress`: drags update the signal,
/// and external changes to the signal move the ruler.
pub fn ruler_picker(progress: RwSignal<f64>) -> RulerPicker {
    build(progress, RulerConfig::default(), None)
}

/// Creates a ruler picker whose configuration follows `config`.
///
/// Writing a new `RulerConfig` to the signal reconfigures the widget in
/// place; changing `tick_count`, `tick_spacing`, or `tick_width` resets
/// progress to zero, while color and dot changes only repaint.
pub fn ruler_picker_with(config: RwSignal<RulerConfig>, progress: RwSignal<f64>) -> RulerPicker {
    build(progress, config.get_untracked(), Some(config))
}

fn build(
    progress: RwSignal<f64>,
    initial: RulerConfig,
    config: Option<RwSignal<RulerConfig>>,
) -> RulerPicker {
    let id = ViewId::new();

    create_effect(move |_| {
        let p = progress.get();
        id.update_state(RulerUpdate::Progress(p));
    });

    if let Some(config) = config {
        create_effect(move |_| {
            let c = config.get();
            id.update_state(RulerUpdate::Config(c));
        });
    }

    let mut state = RulerState::new(initial);
    state.set_scroll_listener(move |p| {
        progress.set(p);
    });

    RulerPicker {
        id,
        held: false,
        last_x: 0.0,
        state,
        size: Default::default(),
    }
    .style(|s| {
        s.width_full()
            .height(constants::RULER_HEIGHT)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl View for RulerPicker {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<RulerUpdate>() {
            let changed = match *update {
                RulerUpdate::Progress(p) => self.state.set_progress(p),
                RulerUpdate::Config(c) => self.state.apply_config(c),
            };
            if changed {
                self.id.request_layout();
            }
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.last_x = e.pos.x;
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    // Same sign convention as scroll gestures: dragging left
                    // yields a positive delta.
                    let dx = self.last_x - e.pos.x;
                    self.last_x = e.pos.x;
                    self.state.scroll_by(dx);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                self.held = false;
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let frame = geometry::build_frame(&self.state, w, h);
        for tick in &frame.ticks {
            cx.fill(&tick.rect, tick.color, 0.0);
        }
        if let Some(dot) = &frame.dot {
            cx.fill(&dot.circle, dot.color, 0.0);
        }
    }
}
