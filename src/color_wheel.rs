//! Circular HSB color wheel view and its signal-backed adapter.
//!
//! Angle maps to hue and radius to saturation. The full-brightness wheel is
//! rasterized once to an RGBA8 buffer and scaled to widget size; brightness
//! is shown as a black overlay.

use std::f64::consts::TAU;
use std::sync::Arc;

use floem::kurbo::{BezPath, Circle, Point, Rect};
use floem::peniko::{self, Blob, Color as PaintColor};
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::adapter::ColorWheelAdapter;
use crate::constants;
use crate::math;

/// Wheel state shared between a [`ColorPicker`](crate::ColorPicker) and the
/// wheel view. Copies refer to the same signals.
#[derive(Clone, Copy)]
pub struct WheelHandle {
    hue: RwSignal<f64>,
    saturation: RwSignal<f64>,
    brightness: RwSignal<f64>,
    dimension: RwSignal<f64>,
}

impl WheelHandle {
    pub fn new() -> Self {
        Self {
            hue: RwSignal::new(0.0),
            saturation: RwSignal::new(0.0),
            brightness: RwSignal::new(1.0),
            dimension: RwSignal::new(constants::WHEEL_DIMENSION),
        }
    }

    fn set_hue_saturation(&self, hue: f64, saturation: f64) {
        self.hue.set(hue);
        self.saturation.set(saturation);
    }
}

impl Default for WheelHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorWheelAdapter for WheelHandle {
    fn hsb(&self) -> (f64, f64, f64) {
        (
            self.hue.get_untracked(),
            self.saturation.get_untracked(),
            self.brightness.get_untracked(),
        )
    }

    fn set_hsb(&mut self, hue: f64, saturation: f64, brightness: f64) {
        self.set_hue_saturation(hue, saturation);
        self.brightness.set(brightness);
    }

    fn set_dimension(&mut self, dimension: f64) {
        self.dimension.set(dimension);
    }
}

/// Closed polygonal circle; vello's rect/circle fast paths don't take alpha fills.
fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for i in 0..64 {
        let angle = TAU * i as f64 / 64.0;
        let pt = Point::new(
            center.x + angle.cos() * radius,
            center.y + angle.sin() * radius,
        );
        if i == 0 {
            path.move_to(pt);
        } else {
            path.line_to(pt);
        }
    }
    path.close_path();
    path
}

/// Feather width in raster pixels for anti-aliasing the circle edge.
const FEATHER: f64 = 3.0;

/// Hue (0.0–1.0) and normalized distance of `(dx, dy)` from the center.
fn polar(dx: f64, dy: f64, radius: f64) -> (f64, f64) {
    let hue = (dy.atan2(dx) / TAU).rem_euclid(1.0);
    let dist = (dx * dx + dy * dy).sqrt() / radius;
    (hue, dist)
}

/// Rasterize a `side`×`side` full-brightness wheel to RGBA8.
///
/// Saturation reaches 1.0 at the circle edge; the feather zone outside it
/// only fades alpha.
fn rasterize_wheel(side: u32) -> Vec<u8> {
    let center = side as f64 / 2.0;
    let radius = center - FEATHER;
    let mut buf = vec![0u8; (side * side * 4) as usize];

    for py in 0..side {
        let dy = py as f64 + 0.5 - center;
        for px in 0..side {
            let dx = px as f64 + 0.5 - center;
            let (hue, dist) = polar(dx, dy, radius);
            let edge = (1.0 + FEATHER / radius - dist) * radius / FEATHER;
            if edge <= 0.0 {
                continue;
            }

            let rgb = math::hsb_to_rgb(hue, dist.min(1.0), 1.0);
            let offset = ((py * side + px) * 4) as usize;
            for (channel, value) in rgb.iter().enumerate() {
                buf[offset + channel] = (value * 255.0 + 0.5) as u8;
            }
            buf[offset + 3] = (edge.min(1.0) * 255.0 + 0.5) as u8;
        }
    }

    buf
}

enum WheelUpdate {
    HueSat(f64, f64),
    Brightness(f64),
}

pub(crate) struct ColorWheel {
    id: ViewId,
    held: bool,
    hue: f64,
    saturation: f64,
    brightness: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64, f64)>,
    wheel_img: Option<peniko::Image>,
    wheel_hash: Vec<u8>,
}

/// Creates the wheel view for `handle`.
///
/// Pointer drags write hue and saturation into `handle`, then call
/// `on_change`. Writes made through the handle by the picker only redraw.
pub(crate) fn color_wheel(handle: WheelHandle, on_change: impl Fn() + 'static) -> ColorWheel {
    let id = ViewId::new();

    create_effect(move |_| {
        let h = handle.hue.get();
        let s = handle.saturation.get();
        id.update_state(WheelUpdate::HueSat(h, s));
    });

    create_effect(move |_| {
        let b = handle.brightness.get();
        id.update_state(WheelUpdate::Brightness(b));
    });

    let (hue, saturation, brightness) = handle.hsb();
    ColorWheel {
        id,
        held: false,
        hue,
        saturation,
        brightness,
        size: Default::default(),
        on_change: Box::new(move |h, s| {
            handle.set_hue_saturation(h, s);
            on_change();
        }),
        wheel_img: None,
        wheel_hash: Vec::new(),
    }
    .style(move |s| {
        let side = handle.dimension.get();
        s.width(side)
            .height(side)
            .cursor(floem::style::CursorStyle::Default)
    })
}

impl ColorWheel {
    fn center(&self) -> Point {
        Point::new(self.size.width as f64 / 2.0, self.size.height as f64 / 2.0)
    }

    fn radius(&self) -> f64 {
        (self.size.width.min(self.size.height) as f64) / 2.0
    }

    fn update_from_pointer(&mut self, pos: Point) {
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        let center = self.center();
        let (hue, dist) = polar(pos.x - center.x, pos.y - center.y, radius);
        self.hue = hue;
        self.saturation = dist.clamp(0.0, 1.0);
    }

    fn cursor_position(&self) -> Point {
        let center = self.center();
        let angle = self.hue * TAU;
        let r = self.saturation * self.radius();
        Point::new(center.x + angle.cos() * r, center.y + angle.sin() * r)
    }

    fn ensure_wheel_image(&mut self) {
        if self.wheel_img.is_some() {
            return;
        }
        let side = constants::WHEEL_RASTER_SIZE;
        let blob = Blob::new(Arc::new(rasterize_wheel(side)));
        self.wheel_hash = blob.id().to_le_bytes().to_vec();
        self.wheel_img = Some(peniko::Image::new(blob, peniko::Format::Rgba8, side, side));
    }

    fn report(&self) {
        (self.on_change)(self.hue, self.saturation);
        self.id.request_layout();
    }
}

impl View for ColorWheel {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<WheelUpdate>() {
            match *update {
                WheelUpdate::HueSat(h, s) => {
                    self.hue = h;
                    self.saturation = s;
                }
                WheelUpdate::Brightness(b) => self.brightness = b,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                self.report();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos);
                self.report();
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let radius = self.radius();
        if radius <= 0.0 {
            return;
        }
        let center = self.center();

        cx.save();
        cx.clip(&Circle::new(center, radius));
        self.ensure_wheel_image();
        if let Some(ref img) = self.wheel_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.wheel_hash,
                },
                Rect::new(
                    center.x - radius,
                    center.y - radius,
                    center.x + radius,
                    center.y + radius,
                ),
            );
        }
        cx.restore();

        let overlay_alpha = 1.0 - self.brightness;
        if overlay_alpha > 0.001 {
            cx.fill(
                &circle_path(center, radius),
                PaintColor::rgba(0.0, 0.0, 0.0, overlay_alpha),
                0.0,
            );
        }

        let cursor = self.cursor_position();
        let shadow = floem::kurbo::Stroke::new(1.0);
        cx.stroke(
            &Circle::new(cursor, constants::CURSOR_RADIUS + 1.0),
            PaintColor::rgba8(0, 0, 0, 80),
            &shadow,
        );
        cx.stroke(
            &Circle::new(cursor, constants::CURSOR_RADIUS),
            PaintColor::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(cursor, constants::CURSOR_RADIUS - 1.5),
            PaintColor::rgba8(0, 0, 0, 80),
            &shadow,
        );
    }
}
