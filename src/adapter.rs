//! Capability surfaces the picker drives, and the delegate traits it answers.
//!
//! The picker never knows what draws the wheel or the sliders. It owns one
//! [`ColorWheelAdapter`] and two [`SliderAdapter`]s, writes derived values
//! into them, and is told about user input through [`ColorWheelDelegate`]
//! and [`SliderDelegate`].

use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::gradient::SliderBackground;

/// A 2D hue/saturation control with a brightness scalar.
///
/// Implementors store HSB state; the color accessors are derived from it.
pub trait ColorWheelAdapter {
    /// Current (hue, saturation, brightness), all 0.0–1.0.
    fn hsb(&self) -> (f64, f64, f64);

    fn set_hsb(&mut self, hue: f64, saturation: f64, brightness: f64);

    /// Layout size of the wheel's square.
    fn set_dimension(&mut self, dimension: f64);

    /// Color at the current hue, saturation and brightness.
    fn tinted_color(&self) -> Color {
        let (h, s, b) = self.hsb();
        Color::from_hsb(h, s, b, 1.0)
    }

    /// Color at the current hue and saturation, full brightness.
    fn raw_color(&self) -> Color {
        let (h, s, _) = self.hsb();
        Color::from_hsb(h, s, 1.0, 1.0)
    }

    /// Move the wheel to `color`. Achromatic colors keep the current hue,
    /// and black keeps the current saturation, so the cursor doesn't jump.
    fn set_tinted_color(&mut self, color: &Color) {
        let (hue, saturation, _) = self.hsb();
        let (h, s, b) = color.to_hsb();
        let h = if s > 0.0 && b > 0.0 { h } else { hue };
        let s = if b > 0.0 { s } else { saturation };
        self.set_hsb(h, s, b);
    }

    fn brightness(&self) -> f64 {
        self.hsb().2
    }

    fn set_brightness(&mut self, brightness: f64) {
        let (h, s, _) = self.hsb();
        self.set_hsb(h, s, brightness);
    }
}

/// Identity of one slider instance, used to route its change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(u64);

impl SliderId {
    /// Allocate an identity no other slider in this process shares.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A 1D control holding a scalar in 0.0–1.0 over a drawn background.
pub trait SliderAdapter {
    fn id(&self) -> SliderId;

    fn value(&self) -> f64;

    /// Move the thumb. Must not report back through [`SliderDelegate`].
    fn set_value(&mut self, value: f64);

    fn set_background(&mut self, background: SliderBackground);
}

/// Receives user-driven wheel changes.
pub trait ColorWheelDelegate {
    fn color_wheel_color_did_change(&mut self);
}

/// Receives user-driven slider changes, tagged with the slider that moved.
pub trait SliderDelegate {
    fn slider_value_did_change(&mut self, slider: SliderId, value: f64);
}
