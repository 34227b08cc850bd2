use std::cell::RefCell;
use std::rc::Rc;

use floem_wheel_picker::{PickerConfig, SharedPicker};

fn shared_with_log() -> (SharedPicker, Rc<RefCell<Vec<String>>>) {
    let picker = SharedPicker::new(PickerConfig::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    picker.on_color_changed(move |event| sink.borrow_mut().push(event.color.clone()));
    (picker, log)
}

#[test]
fn listener_can_load_the_published_color_back() {
    let (picker, log) = shared_with_log();
    let handle = picker.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    picker.on_color_changed(move |event| {
        handle.set_color_text(&event.color).unwrap();
        sink.borrow_mut().push(handle.color());
    });

    picker.set_opacity(0.5);

    assert_eq!(picker.color(), "rgba(255, 255, 255, 0.5)");
    assert_eq!(log.borrow().as_slice(), ["rgba(255, 255, 255, 0.5)"]);
    assert_eq!(seen.borrow().as_slice(), ["rgba(255, 255, 255, 0.5)"]);
}

#[test]
fn events_published_from_a_listener_follow_the_current_one() {
    let (picker, log) = shared_with_log();
    let handle = picker.clone();
    let order = Rc::new(RefCell::new(Vec::new()));
    let sink = order.clone();
    picker.on_color_changed(move |event| {
        sink.borrow_mut().push(event.color.clone());
        if event.color == "rgba(255, 255, 255, 0.5)" {
            handle.set_opacity(0.25);
            // The nested event is not delivered until this one finishes.
            sink.borrow_mut().push("after set_opacity".to_string());
        }
    });

    picker.set_opacity(0.5);

    assert_eq!(
        order.borrow().as_slice(),
        [
            "rgba(255, 255, 255, 0.5)",
            "after set_opacity",
            "rgba(255, 255, 255, 0.25)",
        ]
    );
    assert_eq!(
        log.borrow().as_slice(),
        ["rgba(255, 255, 255, 0.5)", "rgba(255, 255, 255, 0.25)"]
    );
    assert_eq!(picker.color(), "rgba(255, 255, 255, 0.25)");
}

#[test]
fn listener_can_unregister_itself() {
    let picker = SharedPicker::default();
    let handle = picker.clone();
    let calls = Rc::new(RefCell::new(0));
    let counter = calls.clone();
    let id = Rc::new(RefCell::new(None));
    let own_id = id.clone();
    *id.borrow_mut() = Some(picker.on_color_changed(move |_| {
        *counter.borrow_mut() += 1;
        if let Some(id) = own_id.borrow_mut().take() {
            assert!(handle.remove_listener(id));
        }
    }));

    picker.set_opacity(0.5);
    picker.set_opacity(0.75);

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn loading_text_does_not_notify() {
    let (picker, log) = shared_with_log();
    picker.set_color_text("#336699").unwrap();

    assert_eq!(picker.color(), "#336699");
    assert!(log.borrow().is_empty());
}
