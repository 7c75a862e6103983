//! Standalone demo: opens a window with the color field.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_colorfmt::{ColorFormat, color_field, parse_color};

fn main() {
    let color = RwSignal::new(parse_color("#3b82f6"));
    let format = RwSignal::new(ColorFormat::Hsl);

    floem::Application::new()
        .window(
            move |_| {
                color_field(color, format).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((260.0, 96.0))
                    .title("floem-colorfmt"),
            ),
        )
        .run();
}
