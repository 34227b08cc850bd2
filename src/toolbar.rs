//! Row under the sliders: current color text and a copy button.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// Read-only label showing the published color string.
pub(crate) fn color_text(text: RwSignal<String>) -> impl IntoView {
    label(move || text.get()).style(|s| {
        s.font_size(constants::TEXT_FONT)
            .font_family("monospace".to_string())
            .color(Color::rgb8(80, 80, 80))
    })
}

/// Copies `text` to the clipboard on click.
pub(crate) fn copy_button(text: RwSignal<String>) -> impl IntoView {
    let pressed = RwSignal::new(false);
    label(|| lucide_icons::Icon::Copy.unicode().to_string())
        .style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0)
                .font_family("lucide".to_string())
                .padding(3.0)
                .border_radius(3.0)
                .cursor(floem::style::CursorStyle::Pointer)
                .color(c)
                .hover(|s| s.background(Color::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
            pressed.set(true);
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            pressed.set(false);
            copy_to_clipboard(&text.get_untracked());
        })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("failed to copy color to clipboard: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}
