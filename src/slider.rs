//! Horizontal 0.0–1.0 slider that paints a [`SliderBackground`].
//!
//! One view type serves both the brightness and the opacity slider; the
//! picker decides what each one shows by pushing backgrounds through the
//! slider's [`SliderHandle`].

use floem::kurbo::{Rect, Shape};
use floem::peniko::{Color as PaintColor, Gradient};
use floem::reactive::{RwSignal, SignalGet, SignalUpdate, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::adapter::{SliderAdapter, SliderId};
use crate::checkerboard;
use crate::color::Color;
use crate::constants;
use crate::gradient::SliderBackground;

/// Slider state shared between a [`ColorPicker`](crate::ColorPicker) and
/// the slider view. Copies refer to the same signals and identity.
#[derive(Clone, Copy)]
pub struct SliderHandle {
    id: SliderId,
    value: RwSignal<f64>,
    background: RwSignal<SliderBackground>,
}

impl SliderHandle {
    pub fn new() -> Self {
        Self {
            id: SliderId::next(),
            value: RwSignal::new(0.0),
            background: RwSignal::new(SliderBackground::default()),
        }
    }
}

impl Default for SliderHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderAdapter for SliderHandle {
    fn id(&self) -> SliderId {
        self.id
    }

    fn value(&self) -> f64 {
        self.value.get_untracked()
    }

    fn set_value(&mut self, value: f64) {
        self.value.set(value);
    }

    fn set_background(&mut self, background: SliderBackground) {
        self.background.set(background);
    }
}

fn paint_color(color: &Color) -> PaintColor {
    let [r, g, b] = color.rgb();
    PaintColor::rgba(r / 255.0, g / 255.0, b / 255.0, color.alpha())
}

enum SliderUpdate {
    Value(f64),
    Background(SliderBackground),
}

pub(crate) struct GradientSlider {
    id: ViewId,
    held: bool,
    value: f64,
    background: SliderBackground,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
}

/// Creates a slider view for `handle`; 0.0 at the left, 1.0 at the right.
///
/// Pointer drags store the clamped value in `handle`, then call `on_change`
/// with the handle's identity and the value.
pub(crate) fn gradient_slider(
    handle: SliderHandle,
    on_change: impl Fn(SliderId, f64) + 'static,
) -> GradientSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let v = handle.value.get();
        id.update_state(SliderUpdate::Value(v));
    });

    create_effect(move |_| {
        let background = handle.background.get();
        id.update_state(SliderUpdate::Background(background));
    });

    GradientSlider {
        id,
        held: false,
        value: handle.value.get_untracked(),
        background: handle.background.get_untracked(),
        size: Default::default(),
        on_change: Box::new(move |v| {
            handle.value.set(v);
            on_change(handle.id, v);
        }),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl GradientSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let r = constants::THUMB_RADIUS;
        let usable = self.size.width as f64 - 2.0 * r;
        if usable > 0.0 {
            self.value = ((x - r) / usable).clamp(0.0, 1.0);
        }
    }

    fn report(&self) {
        (self.on_change)(self.value);
        self.id.request_layout();
    }
}

impl View for GradientSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SliderUpdate>() {
            match *update {
                SliderUpdate::Value(v) => self.value = v,
                SliderUpdate::Background(background) => self.background = background,
            }
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.report();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x);
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
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        if let Some(pattern) = &self.background.backdrop {
            checkerboard::paint_checkerboard(cx, rect, pattern);
        }
        let gradient = Gradient::new_linear((0.0, h / 2.0), (w, h / 2.0)).with_stops([
            paint_color(&self.background.gradient.from),
            paint_color(&self.background.gradient.to),
        ]);
        // Path, not Rect: vello's rect fast path only fills solid colors.
        cx.fill(&rect.to_path(0.1), &gradient, 0.0);
        cx.restore();

        let hairline = floem::kurbo::Stroke::new(1.0);
        cx.stroke(&rrect, PaintColor::rgba8(0, 0, 0, 40), &hairline);

        let radius = constants::THUMB_RADIUS;
        let thumb = (radius + self.value * (w - 2.0 * radius), h / 2.0);
        cx.stroke(
            &floem::kurbo::Circle::new(thumb, radius),
            PaintColor::rgba8(0, 0, 0, 80),
            &hairline,
        );
        cx.stroke(
            &floem::kurbo::Circle::new(thumb, radius - 1.5),
            PaintColor::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
        cx.stroke(
            &floem::kurbo::Circle::new(thumb, radius - 3.0),
            PaintColor::rgba8(0, 0, 0, 80),
            &hairline,
        );
    }
}
