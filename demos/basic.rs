//! Standalone demo: opens a window with the color picker and logs every
//! published color.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_wheel_picker::{PickerConfig, SharedPicker, color_picker};

fn main() {
    env_logger::init();

    let picker = SharedPicker::new(PickerConfig::default());
    picker.on_color_changed(|event| log::info!("color: {}", event.color));
    if let Err(err) = picker.set_color_text("hsl(210, 80%, 50%)") {
        log::error!("{err}");
    }

    floem::Application::new()
        .window(
            move |_| {
                color_picker(picker.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((232.0, 360.0))
                    .title("floem-wheel-picker"),
            ),
        )
        .run();
}
