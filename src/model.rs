//! In-memory adapters for driving a picker without a window.

use crate::adapter::{ColorWheelAdapter, SliderAdapter, SliderId};
use crate::gradient::SliderBackground;

/// HSB state of a wheel that nothing draws.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelModel {
    hue: f64,
    saturation: f64,
    brightness: f64,
    dimension: f64,
}

impl WheelModel {
    pub fn new() -> Self {
        Self {
            hue: 0.0,
            saturation: 0.0,
            brightness: 1.0,
            dimension: 0.0,
        }
    }

    /// What a pointer drag on a real wheel would do.
    pub fn set_hue_saturation(&mut self, hue: f64, saturation: f64) {
        self.hue = hue.rem_euclid(1.0);
        self.saturation = saturation.clamp(0.0, 1.0);
    }

    pub fn dimension(&self) -> f64 {
        self.dimension
    }
}

impl Default for WheelModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorWheelAdapter for WheelModel {
    fn hsb(&self) -> (f64, f64, f64) {
        (self.hue, self.saturation, self.brightness)
    }

    fn set_hsb(&mut self, hue: f64, saturation: f64, brightness: f64) {
        self.hue = hue;
        self.saturation = saturation;
        self.brightness = brightness;
    }

    fn set_dimension(&mut self, dimension: f64) {
        self.dimension = dimension;
    }
}

/// Scalar and last background of a slider that nothing draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderModel {
    id: SliderId,
    value: f64,
    background: Option<SliderBackground>,
}

impl SliderModel {
    pub fn new() -> Self {
        Self {
            id: SliderId::next(),
            value: 0.0,
            background: None,
        }
    }

    /// Background last pushed by the picker, if any.
    pub fn background(&self) -> Option<&SliderBackground> {
        self.background.as_ref()
    }
}

impl Default for SliderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderAdapter for SliderModel {
    fn id(&self) -> SliderId {
        self.id
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    fn set_background(&mut self, background: SliderBackground) {
        self.background = Some(background);
    }
}
