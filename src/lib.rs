//! # floem-wheel-picker
//!
//! A wheel-and-sliders color picker for [Floem](https://github.com/lapce/floem).
//!
//! A hue/saturation wheel, a brightness slider and an opacity slider are kept
//! in sync with one published color string by a [`ColorPicker`]. Colors loaded
//! from outside keep their text notation (`#hex`, `rgb()`, `hsl()`, keywords)
//! in everything the picker publishes afterwards.
//!
//! The coordinator is independent of Floem: anything implementing
//! [`ColorWheelAdapter`] and [`SliderAdapter`] can be driven by it, and
//! [`WheelModel`]/[`SliderModel`] run it without a window.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem_wheel_picker::{color_picker, PickerConfig, SharedPicker};
//!
//! let picker = SharedPicker::new(PickerConfig::default());
//! picker.on_color_changed(|event| println!("{}", event.color));
//! picker.set_color_text("rgba(255, 0, 0, 0.5)").unwrap();
//! // Use `color_picker(picker.clone())` in your Floem view tree.
//! ```

mod adapter;
mod checkerboard;
mod color;
mod color_wheel;
mod constants;
mod error;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
mod eyedropper;
mod gradient;
mod math;
mod model;
mod picker;
mod picker_view;
mod slider;
mod toolbar;

pub use adapter::{ColorWheelAdapter, ColorWheelDelegate, SliderAdapter, SliderDelegate, SliderId};
pub use checkerboard::CheckerPattern;
pub use color::{Color, ColorFormat};
pub use color_wheel::WheelHandle;
pub use error::ParseColorError;
pub use gradient::{LinearGradient, SliderBackground};
pub use model::{SliderModel, WheelModel};
pub use picker::{ColorChanged, ColorPicker, ListenerId, PickerConfig, PickerElement, PickerPart};
pub use picker_view::SharedPicker;
pub use slider::SliderHandle;

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the picker view for `picker`.
///
/// User edits in the view are published through `picker`'s listeners;
/// colors set on `picker` are shown without being published.
pub fn color_picker(picker: SharedPicker) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker_view::picker_view(picker)
}
