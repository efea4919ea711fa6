// Example: mount a picker, click the next zone, scroll the wheel, and watch committed values.
use wheel_picker::{
    Bounds, LayoutSnapshot, MotionEvent, MotionKind, Picker, PickerOptions, Slot, Value,
};

fn layout(slots: usize) -> LayoutSnapshot {
    LayoutSnapshot {
        frame: Bounds::new(0.0, 0.0, 200.0, 40.0),
        list: Bounds::new(0.0, 0.0, slots as f32 * 40.0, 40.0),
        items: (0..slots)
            .map(|i| Bounds::from_origin_size(i as f32 * 40.0, 0.0, 40.0, 40.0))
            .collect(),
        selection: Bounds::new(80.0, 0.0, 120.0, 40.0),
        prev_zone: Bounds::new(0.0, 0.0, 80.0, 40.0),
        next_zone: Bounds::new(120.0, 0.0, 200.0, 40.0),
    }
}

fn main() {
    let options = PickerOptions::new(["XS", "S", "M", "L", "XL"])
        .with_placeholder(Some("Size"))
        .with_on_change(Some(|v: Option<&Value>| println!("on_change: {v:?}")));
    let mut p = Picker::new(options);
    p.attach(&layout(p.slot_count()));

    let mut labels = Vec::new();
    p.for_each_slot(|slot: Slot<'_>| labels.push(slot.label().to_owned()));
    println!("slots={labels:?} index={} offset={:?}", p.selected_index(), p.offset());

    // A click in the next zone corrects forward and commits after the transition.
    p.handle(MotionEvent::pointer(MotionKind::Start, 160.0, 20.0), 0);
    p.handle(MotionEvent::pointer(MotionKind::End, 160.0, 20.0), 0);
    println!("transitioning={} offset={:?}", p.is_transitioning(), p.offset());
    if let Some(due) = p.next_deadline() {
        p.tick(due);
    }
    println!("after click: value={:?}", p.selected_value());

    // Wheel ticks update the value live; the debounce aligns the strip afterwards.
    let mut now_ms = 1_000;
    for _ in 0..6 {
        let propagation = p.handle(MotionEvent::wheel(12.0), now_ms);
        println!(
            "wheel t={now_ms} offset={:?} value={:?} prevent={}",
            p.offset(),
            p.selected_value(),
            propagation.prevents_default()
        );
        now_ms += 16;
    }
    while let Some(due) = p.next_deadline() {
        p.tick(due);
    }
    println!("settled: state={:?}", p.state());
}
