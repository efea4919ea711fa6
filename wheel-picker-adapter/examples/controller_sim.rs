use wheel_picker::{Bounds, LayoutSnapshot, PickerOptions};
use wheel_picker_adapter::{Controller, Easing, MousePhase, RawInput};

fn main() {
    // Example: a host loop driving the controller without holding any UI objects.
    //
    // An adapter would:
    // - subscribe the listener kinds returned by attach (and unsubscribe those from detach)
    // - forward raw events through dispatch, suppressing the default action when asked
    // - call tick(now_ms) per frame while next_wake() is set
    // - apply the returned offset as the list translation
    let layout = LayoutSnapshot {
        frame: Bounds::new(0.0, 0.0, 300.0, 48.0),
        list: Bounds::new(0.0, 0.0, 7.0 * 60.0, 48.0),
        items: (0..7)
            .map(|i| Bounds::from_origin_size(i as f32 * 60.0, 0.0, 60.0, 48.0))
            .collect(),
        selection: Bounds::new(120.0, 0.0, 180.0, 48.0),
        prev_zone: Bounds::new(0.0, 0.0, 120.0, 48.0),
        next_zone: Bounds::new(180.0, 0.0, 300.0, 48.0),
    };

    let options = PickerOptions::new(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"])
        .with_value(Some("Wed"));
    let mut c = Controller::new(options).with_easing(Easing::EaseOut);
    let kinds = c.attach(&layout);
    println!("listen={kinds:?}");
    println!("mounted: offset={:?}", c.display_offset(0));

    let mut now_ms = 0u64;
    let down = c.dispatch(RawInput::mouse(MousePhase::Down, 250.0, 24.0), now_ms);
    let up = c.dispatch(RawInput::mouse(MousePhase::Up, 250.0, 24.0), now_ms);
    println!("click: prevent={} {}", down.prevents_default(), up.prevents_default());

    while c.next_wake().is_some() {
        now_ms += 16;
        let off = c.tick(now_ms);
        println!(
            "t={now_ms} off={off:?} value={:?}",
            c.picker().selected_value()
        );
    }

    let removed = c.detach();
    println!("unlisten={} kinds", removed.len());
}
