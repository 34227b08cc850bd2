use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use floem_wheel_picker::{
    Color, ColorFormat, ColorPicker, ColorWheelAdapter, ColorWheelDelegate, SliderAdapter,
    SliderBackground, SliderDelegate, SliderId, WheelModel,
};

/// Slider that remembers every background it was given.
struct RecordingSlider {
    id: SliderId,
    value: f64,
    backgrounds: Vec<SliderBackground>,
}

impl RecordingSlider {
    fn new() -> Self {
        Self {
            id: SliderId::next(),
            value: 0.0,
            backgrounds: Vec::new(),
        }
    }

    fn last_background(&self) -> &SliderBackground {
        self.backgrounds.last().expect("no background pushed yet")
    }
}

impl SliderAdapter for RecordingSlider {
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
        self.backgrounds.push(background);
    }
}

/// Wheel that snaps hue to 30° steps.
#[derive(Default)]
struct SteppedWheel {
    hsb: (f64, f64, f64),
}

impl ColorWheelAdapter for SteppedWheel {
    fn hsb(&self) -> (f64, f64, f64) {
        self.hsb
    }

    fn set_hsb(&mut self, hue: f64, saturation: f64, brightness: f64) {
        let hue = (hue * 12.0).round() / 12.0;
        self.hsb = (hue, saturation, brightness);
    }

    fn set_dimension(&mut self, _dimension: f64) {}
}

type Picker = ColorPicker<WheelModel, RecordingSlider>;

fn picker_with_log() -> (Picker, Rc<RefCell<Vec<String>>>) {
    let mut picker = ColorPicker::new(
        WheelModel::new(),
        RecordingSlider::new(),
        RecordingSlider::new(),
    );
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    picker.add_color_changed_listener(move |event| sink.borrow_mut().push(event.color.clone()));
    (picker, log)
}

fn background_counts(picker: &Picker) -> (usize, usize) {
    let element = picker.element();
    (
        element.brightness_slider.backgrounds.len(),
        element.opacity_slider.backgrounds.len(),
    )
}

fn parse(text: &str) -> Color {
    text.parse().unwrap()
}

#[test]
fn unchanged_brightness_is_a_no_op() {
    let (mut picker, log) = picker_with_log();
    picker.set_color_text("rgb(0, 0, 128)").unwrap();
    let before = background_counts(&picker);

    let current = picker.brightness();
    picker.set_brightness(current);
    picker.slider_value_did_change(picker.element().brightness_slider.id(), current);

    assert!(log.borrow().is_empty());
    assert_eq!(background_counts(&picker), before);
}

#[test]
fn unchanged_opacity_is_a_no_op() {
    let (mut picker, log) = picker_with_log();
    picker.set_opacity(0.4);
    assert_eq!(log.borrow().len(), 1);

    picker.set_opacity(0.4);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn opacity_is_published_to_two_decimals() {
    let (mut picker, log) = picker_with_log();
    for (input, expected) in [(0.666, 0.67), (0.3005, 0.3), (0.125, 0.13), (0.999, 1.0)] {
        picker.set_opacity(input);
        assert_eq!(parse(picker.color()).alpha(), expected, "opacity {input}");
        assert_eq!(picker.opacity(), input);
    }
    assert_eq!(log.borrow().len(), 4);
}

#[test]
fn loading_a_color_never_notifies() {
    let (mut picker, log) = picker_with_log();
    for text in ["red", "#00ff0080", "hsl(200, 30%, 20%)", "rgba(0, 0, 0, 0)", "white"] {
        picker.set_color_text(text).unwrap();
    }
    picker.set_color(&Color::BLACK);
    assert!(log.borrow().is_empty());
}

#[test]
fn loaded_colors_round_trip_in_their_own_format() {
    let (mut picker, _) = picker_with_log();
    for text in [
        "#336699",
        "#f80",
        "#12345678",
        "rgb(10, 200, 30)",
        "rgba(255, 0, 0, 0.5)",
        "hsl(120, 50%, 40%)",
        "hsla(300, 60%, 70%, 0.25)",
        "navy",
    ] {
        let input = parse(text);
        picker.set_color(&input);
        assert_eq!(picker.format(), input.format(), "{text}");

        let output = parse(picker.color());
        assert_eq!(output.format(), input.format(), "{text} -> {}", picker.color());
        for (out, inp) in output.rgb().iter().zip(input.rgb()) {
            assert_abs_diff_eq!(*out, inp, epsilon = 1.5);
        }
        assert_abs_diff_eq!(output.alpha(), input.alpha(), epsilon = 0.01);
    }
}

#[test]
fn brightness_slider_follows_the_wheel() {
    let (mut picker, _) = picker_with_log();
    picker.set_color_text("rgb(0, 0, 128)").unwrap();

    let element = picker.element();
    assert_abs_diff_eq!(element.wheel.brightness(), 128.0 / 255.0, epsilon = 1e-9);
    assert_eq!(element.brightness_slider.value(), element.wheel.brightness());
    assert_eq!(picker.brightness(), element.wheel.brightness());
}

#[test]
fn opacity_setter_leaves_gradients_until_the_wheel_moves() {
    let (mut picker, _) = picker_with_log();
    picker.set_color_text("rgb(255, 0, 0)").unwrap();
    let before = background_counts(&picker);
    let opacity_ramp = picker.element().opacity_slider.last_background().clone();

    picker.set_opacity(0.2);
    assert_eq!(background_counts(&picker), before);
    assert_eq!(
        picker.element().opacity_slider.last_background(),
        &opacity_ramp
    );

    picker.wheel_mut().set_hue_saturation(1.0 / 3.0, 1.0);
    picker.color_wheel_color_did_change();
    assert_eq!(background_counts(&picker), (before.0 + 1, before.1 + 1));
    assert_eq!(
        picker
            .element()
            .opacity_slider
            .last_background()
            .gradient
            .to
            .to_string(),
        "rgb(0, 255, 0)"
    );

    picker.set_brightness(0.5);
    assert_eq!(background_counts(&picker), (before.0 + 2, before.1 + 2));
}

#[test]
fn wheel_moves_keep_the_loaded_format() {
    let (mut picker, log) = picker_with_log();
    picker.set_color_text("#ff0000").unwrap();

    picker.wheel_mut().set_hue_saturation(1.0 / 3.0, 1.0);
    picker.color_wheel_color_did_change();

    assert_eq!(picker.color(), "#00ff00");
    assert_eq!(log.borrow().as_slice(), ["#00ff00"]);
}

#[test]
fn brightness_change_redraws_ramps_from_the_wheel() {
    let (mut picker, log) = picker_with_log();
    picker.set_color_text("rgb(255, 0, 0)").unwrap();

    picker.set_brightness(0.5);
    assert_eq!(picker.color(), "rgb(128, 0, 0)");
    assert_eq!(log.borrow().as_slice(), ["rgb(128, 0, 0)"]);

    let element = picker.element();
    assert_eq!(
        element.brightness_slider.last_background().to_string(),
        "linear-gradient(90deg, black, rgb(255, 0, 0))"
    );
    assert_eq!(
        element.opacity_slider.last_background().gradient.to.to_string(),
        "rgb(128, 0, 0)"
    );
    assert!(element.opacity_slider.last_background().backdrop.is_some());
}

#[test]
fn slider_events_dispatch_by_identity() {
    let (mut picker, log) = picker_with_log();
    picker.set_color_text("rgb(255, 0, 0)").unwrap();
    let opacity_id = picker.element().opacity_slider.id();
    let brightness_id = picker.element().brightness_slider.id();

    picker.slider_value_did_change(opacity_id, 0.4);
    assert_eq!(picker.opacity(), 0.4);
    assert_eq!(picker.element().wheel.brightness(), 1.0);

    picker.slider_value_did_change(brightness_id, 0.2);
    assert_eq!(picker.element().wheel.brightness(), 0.2);
    assert_eq!(picker.opacity(), 0.4);

    picker.slider_value_did_change(SliderId::next(), 0.9);
    assert_eq!(log.borrow().len(), 2);
    assert_eq!(picker.color(), "rgba(51, 0, 0, 0.4)");
}

#[test]
fn half_transparent_red_loads_into_every_control() {
    let (mut picker, log) = picker_with_log();
    picker.set_color_text("rgba(255,0,0,0.5)").unwrap();

    assert_eq!(picker.color(), "rgba(255, 0, 0, 0.5)");
    let color = parse(picker.color());
    assert_eq!(color.format(), ColorFormat::Rgba);
    assert_eq!(color.rgb(), [255.0, 0.0, 0.0]);
    assert_eq!(color.alpha(), 0.5);

    let element = picker.element();
    assert_eq!(element.opacity_slider.value(), 0.5);
    assert_eq!(element.brightness_slider.value(), 1.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn opacity_change_publishes_once() {
    let (mut picker, log) = picker_with_log();
    picker.set_opacity(0.3005);

    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0], picker.color());
    assert_eq!(picker.color(), "rgba(255, 255, 255, 0.3)");
    assert_eq!(parse(picker.color()).alpha(), 0.3);
}

#[test]
fn sampled_colors_are_published_once() {
    let (mut picker, log) = picker_with_log();
    picker.apply_sampled_color(&parse("hsl(240, 100%, 50%)"));

    assert_eq!(picker.color(), "hsl(240, 100%, 50%)");
    assert_eq!(log.borrow().as_slice(), ["hsl(240, 100%, 50%)"]);
}

#[test]
fn opacity_ramp_uses_the_loaded_color_not_the_wheel() {
    let mut picker = ColorPicker::new(
        SteppedWheel::default(),
        RecordingSlider::new(),
        RecordingSlider::new(),
    );
    let input = parse("rgb(255, 32, 0)");
    picker.set_color(&input);

    assert_eq!(picker.color(), "rgb(255, 0, 0)");
    let element = picker.element();
    assert_eq!(element.opacity_slider.last_background().gradient.to, input);
    assert_eq!(
        element.brightness_slider.last_background().gradient.to.to_string(),
        "rgb(255, 0, 0)"
    );
}
