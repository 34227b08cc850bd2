//! Floem front end: a shared, signal-backed picker and its root view.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use floem::peniko::Color as PaintColor;
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalUpdate};

use crate::adapter::{ColorWheelDelegate, SliderDelegate, SliderId};
use crate::color::{Color, ColorFormat};
use crate::color_wheel::{WheelHandle, color_wheel};
use crate::constants;
#[cfg(all(feature = "eyedropper", target_os = "macos"))]
use crate::eyedropper::eyedropper_button;
use crate::error::ParseColorError;
use crate::picker::{ColorChanged, ColorPicker, ListenerId, PickerConfig};
use crate::slider::{SliderHandle, gradient_slider};
use crate::toolbar::{color_text, copy_button};

type FloemPicker = ColorPicker<WheelHandle, SliderHandle>;
type SharedListener = Rc<RefCell<Box<dyn FnMut(&ColorChanged)>>>;

/// Listeners of a [`SharedPicker`] and the events waiting for them.
///
/// Events are queued while the picker is borrowed and delivered after the
/// borrow is released, so listeners may call back into the picker.
#[derive(Default)]
struct Dispatcher {
    listeners: RefCell<Vec<(ListenerId, SharedListener)>>,
    pending: RefCell<VecDeque<ColorChanged>>,
    dispatching: Cell<bool>,
    next_listener: Cell<u64>,
}

impl Dispatcher {
    fn add(&self, listener: impl FnMut(&ColorChanged) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        let listener: Box<dyn FnMut(&ColorChanged)> = Box::new(listener);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn remove(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Deliver queued events in order. Events published by a listener are
    /// delivered by the outermost call once the current event is done.
    fn flush(&self) {
        if self.dispatching.replace(true) {
            return;
        }
        loop {
            let Some(event) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            let listeners: Vec<SharedListener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect();
            for listener in listeners {
                let mut listener = listener.borrow_mut();
                (*listener)(&event);
            }
        }
        self.dispatching.set(false);
    }
}

/// A [`ColorPicker`] wired to Floem views. Clones share one picker.
///
/// Listeners run after the picker is released and may call any method on
/// the same `SharedPicker`.
#[derive(Clone)]
pub struct SharedPicker {
    inner: Rc<RefCell<FloemPicker>>,
    dispatcher: Rc<Dispatcher>,
    text: RwSignal<String>,
}

impl SharedPicker {
    pub fn new(config: PickerConfig) -> Self {
        let mut picker = ColorPicker::with_config(
            WheelHandle::new(),
            SliderHandle::new(),
            SliderHandle::new(),
            config,
        );
        let text = RwSignal::new(picker.color().to_string());
        let dispatcher = Rc::new(Dispatcher::default());
        let queue = dispatcher.clone();
        picker.add_color_changed_listener(move |event| {
            text.set(event.color.clone());
            queue.pending.borrow_mut().push_back(event.clone());
        });
        Self {
            inner: Rc::new(RefCell::new(picker)),
            dispatcher,
            text,
        }
    }

    /// Run `f` on the picker, then deliver whatever it published.
    fn with_picker<R>(&self, f: impl FnOnce(&mut FloemPicker) -> R) -> R {
        let result = f(&mut self.inner.borrow_mut());
        self.dispatcher.flush();
        result
    }

    pub fn color(&self) -> String {
        self.inner.borrow().color().to_string()
    }

    pub fn format(&self) -> ColorFormat {
        self.inner.borrow().format()
    }

    /// Load `color` without notifying listeners.
    pub fn set_color(&self, color: &Color) {
        self.with_picker(|picker| picker.set_color(color));
        self.refresh_text();
    }

    pub fn set_color_text(&self, text: &str) -> Result<(), ParseColorError> {
        self.with_picker(|picker| picker.set_color_text(text))?;
        self.refresh_text();
        Ok(())
    }

    pub fn set_brightness(&self, brightness: f64) {
        self.with_picker(|picker| picker.set_brightness(brightness));
    }

    pub fn set_opacity(&self, opacity: f64) {
        self.with_picker(|picker| picker.set_opacity(opacity));
    }

    #[cfg(all(feature = "eyedropper", target_os = "macos"))]
    pub(crate) fn apply_sampled_color(&self, color: &Color) {
        self.with_picker(|picker| picker.apply_sampled_color(color));
    }

    pub(crate) fn wheel_did_change(&self) {
        self.with_picker(|picker| picker.color_wheel_color_did_change());
    }

    pub(crate) fn slider_did_change(&self, slider: SliderId, value: f64) {
        self.with_picker(|picker| picker.slider_value_did_change(slider, value));
    }

    pub fn on_color_changed(
        &self,
        listener: impl FnMut(&ColorChanged) + 'static,
    ) -> ListenerId {
        self.dispatcher.add(listener)
    }

    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.dispatcher.remove(id)
    }

    fn refresh_text(&self) {
        let color = self.color();
        self.text.set(color);
    }
}

impl Default for SharedPicker {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

/// Wheel, brightness slider, opacity slider, then the toolbar row.
pub(crate) fn picker_view(picker: SharedPicker) -> impl IntoView {
    let (wheel, brightness, opacity) = {
        let inner = picker.inner.borrow();
        let element = inner.element();
        (*element.wheel, *element.brightness_slider, *element.opacity_slider)
    };

    let wheel_picker = picker.clone();
    let on_wheel = move || wheel_picker.wheel_did_change();

    let slider_picker = picker.clone();
    let on_slider = move |id: SliderId, value: f64| slider_picker.slider_did_change(id, value);
    let on_slider_too = on_slider.clone();

    let text = picker.text;

    v_stack((
        color_wheel(wheel, on_wheel).style(|s| {
            s.margin_top(12.0)
                .align_self(Some(floem::taffy::AlignItems::Center))
        }),
        gradient_slider(brightness, on_slider),
        gradient_slider(opacity, on_slider_too),
        h_stack((
            #[cfg(all(feature = "eyedropper", target_os = "macos"))]
            eyedropper_button(picker.clone()),
            color_text(text),
            empty().style(|s| s.flex_grow(1.0)),
            copy_button(text),
        ))
        .style(|s| s.items_center().gap(constants::GAP / 2.0)),
    ))
    .style(|s| {
        s.gap(constants::GAP)
            .padding(constants::PADDING)
            .size_full()
            .background(PaintColor::rgb8(242, 242, 242))
    })
}
