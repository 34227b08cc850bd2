//! Picker coordinator: keeps the wheel, the two sliders and the published
//! color string in sync.
//!
//! User input arrives through [`ColorWheelDelegate`] and [`SliderDelegate`]
//! and is published to listeners as [`ColorChanged`]. A color loaded with
//! [`ColorPicker::set_color`] is pushed into the controls without being
//! published, so a listener that writes back can never start a loop.

use log::{debug, trace};

use crate::adapter::{ColorWheelAdapter, ColorWheelDelegate, SliderAdapter, SliderDelegate, SliderId};
use crate::checkerboard::CheckerPattern;
use crate::color::{Color, ColorFormat};
use crate::constants;
use crate::error::ParseColorError;
use crate::gradient::SliderBackground;
use crate::math;

/// Construction options for a [`ColorPicker`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    wheel_dimension: f64,
    initial_color: Color,
}

impl PickerConfig {
    /// Wheel side length, default: 200.0
    pub fn wheel_dimension(mut self, dimension: f64) -> Self {
        self.wheel_dimension = dimension;
        self
    }

    /// Color loaded at construction, default: white
    pub fn initial_color(mut self, color: Color) -> Self {
        self.initial_color = color;
        self
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            wheel_dimension: constants::WHEEL_DIMENSION,
            initial_color: Color::WHITE,
        }
    }
}

/// Payload of the "color changed" event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChanged {
    pub color: String,
}

impl ColorChanged {
    pub const NAME: &'static str = "css-color-picker-color-changed";
}

/// Handle returned by [`ColorPicker::add_color_changed_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

type Listener = Box<dyn FnMut(&ColorChanged)>;

/// Children of the picker's root container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPart {
    Wheel,
    BrightnessSlider,
    OpacitySlider,
}

/// Borrowed view of the root container.
pub struct PickerElement<'a, W, S> {
    pub wheel: &'a W,
    pub brightness_slider: &'a S,
    pub opacity_slider: &'a S,
}

impl<W, S> PickerElement<'_, W, S> {
    /// Layout order of the children, top to bottom.
    pub fn children(&self) -> [PickerPart; 3] {
        [
            PickerPart::Wheel,
            PickerPart::BrightnessSlider,
            PickerPart::OpacitySlider,
        ]
    }
}

pub struct ColorPicker<W, S> {
    wheel: W,
    brightness_slider: S,
    opacity_slider: S,
    /// Last brightness forwarded to or read back from the wheel.
    brightness: f64,
    opacity: f64,
    format: ColorFormat,
    suppress_updates: bool,
    color: String,
    opacity_pattern: CheckerPattern,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<W: ColorWheelAdapter, S: SliderAdapter> ColorPicker<W, S> {
    pub fn new(wheel: W, brightness_slider: S, opacity_slider: S) -> Self {
        Self::with_config(wheel, brightness_slider, opacity_slider, PickerConfig::default())
    }

    pub fn with_config(mut wheel: W, brightness_slider: S, opacity_slider: S, config: PickerConfig) -> Self {
        wheel.set_dimension(config.wheel_dimension);
        let mut picker = Self {
            wheel,
            brightness_slider,
            opacity_slider,
            brightness: 1.0,
            opacity: 1.0,
            format: config.initial_color.format(),
            suppress_updates: false,
            color: String::new(),
            opacity_pattern: CheckerPattern::default(),
            listeners: Vec::new(),
            next_listener: 0,
        };
        picker.set_color(&config.initial_color);
        picker
    }

    pub fn element(&self) -> PickerElement<'_, W, S> {
        PickerElement {
            wheel: &self.wheel,
            brightness_slider: &self.brightness_slider,
            opacity_slider: &self.opacity_slider,
        }
    }

    /// Mutable wheel access, for forwarding pointer input before calling
    /// [`ColorWheelDelegate::color_wheel_color_did_change`].
    pub fn wheel_mut(&mut self) -> &mut W {
        &mut self.wheel
    }

    /// The published color string.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Format the published string is rendered in.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: f64) {
        if brightness == self.brightness {
            trace!("brightness unchanged at {brightness}");
            return;
        }
        self.brightness = brightness;
        self.wheel.set_brightness(brightness);

        self.update_color();
        let raw = self.wheel.raw_color();
        let tinted = self.wheel.tinted_color();
        self.update_sliders(&raw, &tinted);
    }

    /// Store a new opacity and publish. Slider gradients are left as they are.
    pub fn set_opacity(&mut self, opacity: f64) {
        if opacity == self.opacity {
            trace!("opacity unchanged at {opacity}");
            return;
        }
        self.opacity = opacity;
        self.update_color();
    }

    /// Load `color` into the wheel and sliders without publishing it.
    ///
    /// The format of `color` becomes the format of every string published
    /// afterwards, until the next call.
    pub fn set_color(&mut self, color: &Color) {
        debug!("loading color {color}");
        self.suppress_updates = true;

        self.format = color.format();
        self.wheel.set_tinted_color(color);
        self.brightness = self.wheel.brightness();
        self.brightness_slider.set_value(self.brightness);

        self.opacity = color.alpha();
        self.opacity_slider.set_value(self.opacity);
        // The input color, not the wheel's, so any wheel quantization
        // doesn't show in the ramp.
        let raw = self.wheel.raw_color();
        self.update_sliders(&raw, color);

        self.suppress_updates = false;
        self.color = self.render_color();
    }

    /// Parse `text` and [`set_color`](Self::set_color) it.
    pub fn set_color_text(&mut self, text: &str) -> Result<(), ParseColorError> {
        let color = text.parse::<Color>()?;
        self.set_color(&color);
        Ok(())
    }

    /// Load a color the user picked outside the picker (e.g. from the
    /// screen) and publish it once.
    pub fn apply_sampled_color(&mut self, color: &Color) {
        self.set_color(color);
        self.update_color();
    }

    pub fn add_color_changed_listener(&mut self, listener: impl FnMut(&ColorChanged) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not registered.
    pub fn remove_color_changed_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn render_color(&self) -> String {
        let opacity = math::round_hundredths(self.opacity);
        let [r, g, b] = self.wheel.tinted_color().rgb();
        Color::new(ColorFormat::Rgba, [r, g, b, opacity]).to_string_in(self.format)
    }

    fn update_color(&mut self) {
        if self.suppress_updates {
            trace!("color update suppressed");
            return;
        }

        self.color = self.render_color();
        debug!("color changed to {}", self.color);

        let event = ColorChanged {
            color: self.color.clone(),
        };
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }

    fn update_sliders(&mut self, raw: &Color, tinted: &Color) {
        self.opacity_slider
            .set_background(SliderBackground::opacity(tinted, &self.opacity_pattern));
        self.brightness_slider
            .set_background(SliderBackground::brightness(raw));
    }
}

impl<W: ColorWheelAdapter, S: SliderAdapter> ColorWheelDelegate for ColorPicker<W, S> {
    fn color_wheel_color_did_change(&mut self) {
        self.update_color();
        let raw = self.wheel.raw_color();
        let tinted = self.wheel.tinted_color();
        self.update_sliders(&raw, &tinted);
    }
}

impl<W: ColorWheelAdapter, S: SliderAdapter> SliderDelegate for ColorPicker<W, S> {
    fn slider_value_did_change(&mut self, slider: SliderId, value: f64) {
        if slider == self.opacity_slider.id() {
            self.set_opacity(value);
        } else if slider == self.brightness_slider.id() {
            self.set_brightness(value);
        } else {
            trace!("ignoring value from unknown slider {slider:?}");
        }
    }
}
