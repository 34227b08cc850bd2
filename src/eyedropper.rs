//! macOS screen color sampler (`NSColorSampler`) for loading a color from
//! anywhere on screen.
//!
//! The sampler is asynchronous: macOS shows a magnifier overlay and calls
//! back once the user clicks a pixel, or never if they press Esc.

use std::cell::Cell;

use block2::RcBlock;
use objc2::rc::{Allocated, Id};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, msg_send_id};

use floem::peniko::Color as PaintColor;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::color::{Color, ColorFormat};
use crate::picker_view::SharedPicker;

/// sRGB components of an `NSColor`, or `None` if it has no sRGB form.
///
/// # Safety
/// `color` must point to a live `NSColor`.
unsafe fn srgb_components(color: *mut AnyObject) -> Option<[f64; 4]> {
    let color_space_cls = AnyClass::get("NSColorSpace")?;
    unsafe {
        let srgb: *const AnyObject = msg_send![color_space_cls, sRGBColorSpace];
        if srgb.is_null() {
            return None;
        }
        let converted: *const AnyObject = msg_send![&*color, colorUsingColorSpace: &*srgb];
        if converted.is_null() {
            return None;
        }
        let [mut r, mut g, mut b, mut a] = [0.0_f64; 4];
        let _: () = msg_send![
            &*converted,
            getRed: &mut r,
            green: &mut g,
            blue: &mut b,
            alpha: &mut a
        ];
        Some([r, g, b, a])
    }
}

/// Show the system sampler; `on_pick` receives the sampled sRGB color.
///
/// Must be called from the main thread (Floem event handlers satisfy this).
fn sample_color(on_pick: impl FnOnce(Color) + 'static) {
    let Some(sampler_cls) = AnyClass::get("NSColorSampler") else {
        log::warn!("NSColorSampler unavailable; eyedropper disabled");
        return;
    };

    let sampler: Allocated<AnyObject> = unsafe { msg_send_id![sampler_cls, alloc] };
    let sampler: Id<AnyObject> = unsafe { msg_send_id![sampler, init] };

    let on_pick: Cell<Option<Box<dyn FnOnce(Color)>>> = Cell::new(Some(Box::new(on_pick)));
    let handler = RcBlock::new(move |picked: *mut AnyObject| {
        if picked.is_null() {
            log::debug!("eyedropper cancelled");
            return;
        }
        let Some([r, g, b, a]) = (unsafe { srgb_components(picked) }) else {
            return;
        };
        if let Some(callback) = on_pick.take() {
            callback(Color::new(
                ColorFormat::Rgba,
                [r * 255.0, g * 255.0, b * 255.0, a],
            ));
        }
    });

    unsafe {
        let _: () = msg_send![&*sampler, showSamplerWithSelectionHandler: &*handler];
    }
}

/// Button that samples a screen color into `picker`.
///
/// The sample keeps the picker's current text format and is published
/// like any other user edit.
pub(crate) fn eyedropper_button(picker: SharedPicker) -> impl IntoView {
    let pressed = RwSignal::new(false);
    label(|| lucide_icons::Icon::Pipette.unicode().to_string())
        .style(move |s| {
            let c = if pressed.get() {
                PaintColor::rgb8(80, 80, 80)
            } else {
                PaintColor::rgb8(120, 120, 120)
            };
            s.font_size(16.0)
                .font_family("lucide".to_string())
                .cursor(floem::style::CursorStyle::Pointer)
                .border_radius(3.0)
                .padding(2.0)
                .color(c)
                .hover(|s| s.background(PaintColor::rgb8(230, 230, 230)))
        })
        .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
            pressed.set(true);
        })
        .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
            pressed.set(false);
            let picker = picker.clone();
            sample_color(move |sampled| {
                let sampled = sampled.with_format(picker.format());
                picker.apply_sampled_color(&sampled);
            });
        })
}
