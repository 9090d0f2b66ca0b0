//! Standalone demo: a ruler above a label showing the reported progress.
//! Clicking the label resets the ruler and swaps in a denser magenta config.

use floem::peniko::Color;
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_ruler::{ruler_picker_with, RulerConfig};

fn main() {
    let config = RwSignal::new(RulerConfig::default());
    let progress = RwSignal::new(0.0f64);

    floem::Application::new()
        .window(
            move |_| {
                let readout = label(move || format!("{:.2}", progress.get()))
                    .style(|s| s.font_size(20.0).padding(12.0))
                    .on_click_stop(move |_| {
                        progress.set(0.0);
                        config.set(RulerConfig {
                            tick_count: 10,
                            tick_spacing: 35.0,
                            tick_width: 3.0,
                            tick_color: Color::rgba8(255, 0, 255, 255),
                            ..RulerConfig::default()
                        });
                    });

                v_stack((ruler_picker_with(config, progress), readout))
                    .style(|s| s.flex_col().items_center().width_full())
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((480.0, 220.0))
                    .title("floem-ruler"),
            ),
        )
        .run();
}
