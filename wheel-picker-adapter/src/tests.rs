use crate::*;

use std::vec::Vec;
use wheel_picker::{
    Bounds, InputSource, LayoutSnapshot, MotionKind, Orientation, PickerOptions, Point,
    Propagation, Value,
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

fn attached() -> Controller {
    let options = PickerOptions::new(["A", "B", "C", "D", "E"]).with_value(Some("A"));
    let mut c = Controller::new(options);
    let kinds = c.attach(&layout(5));
    assert_eq!(kinds.len(), 9);
    c
}

fn click(c: &mut Controller, x: f32, now_ms: u64) {
    c.dispatch(RawInput::mouse(MousePhase::Down, x, 20.0), now_ms);
    c.dispatch(RawInput::mouse(MousePhase::Up, x, 20.0), now_ms);
}

#[test]
fn mouse_normalizes_primary_button_only() {
    let config = InputConfig::default();
    let down = RawInput::mouse(MousePhase::Down, 3.0, 4.0);
    let ev = normalize(&down, Orientation::Horizontal, &config).unwrap();
    assert_eq!(ev.kind, MotionKind::Start);
    assert_eq!(ev.source, InputSource::Pointer);
    assert_eq!(ev.position, Point::new(3.0, 4.0));

    let secondary = RawInput::Mouse {
        phase: MousePhase::Down,
        position: Point::new(3.0, 4.0),
        button: MouseButton::Secondary,
        cancelable: true,
    };
    assert!(normalize(&secondary, Orientation::Horizontal, &config).is_none());

    // Moves and leaves carry no button semantics.
    let leave = RawInput::Mouse {
        phase: MousePhase::Leave,
        position: Point::default(),
        button: MouseButton::Other(7),
        cancelable: false,
    };
    let ev = normalize(&leave, Orientation::Horizontal, &config).unwrap();
    assert_eq!(ev.kind, MotionKind::Cancel);
    assert!(!ev.cancelable);
}

#[test]
fn touch_falls_back_to_active_touches() {
    let config = InputConfig::default();
    let start = RawInput::Touch {
        phase: TouchPhase::Start,
        changed: None,
        touch: Some(Point::new(9.0, 1.0)),
        cancelable: true,
    };
    let ev = normalize(&start, Orientation::Horizontal, &config).unwrap();
    assert_eq!(ev.source, InputSource::Touch);
    assert_eq!(ev.position, Point::new(9.0, 1.0));

    let bare = RawInput::Touch {
        phase: TouchPhase::Move,
        changed: None,
        touch: None,
        cancelable: true,
    };
    assert!(normalize(&bare, Orientation::Horizontal, &config).is_none());

    let cancel = RawInput::Touch {
        phase: TouchPhase::Cancel,
        changed: None,
        touch: None,
        cancelable: true,
    };
    let ev = normalize(&cancel, Orientation::Horizontal, &config).unwrap();
    assert_eq!(ev.kind, MotionKind::Cancel);
}

#[test]
fn wheel_projects_and_scales_deltas() {
    let config = InputConfig {
        line_height: 10.0,
        page_size: 300.0,
    };
    let raw = RawInput::wheel(2.0, -5.0);
    assert_eq!(
        normalize(&raw, Orientation::Horizontal, &config).map(|e| e.delta),
        Some(2.0)
    );
    assert_eq!(
        normalize(&raw, Orientation::Vertical, &config).map(|e| e.delta),
        Some(-5.0)
    );

    let lines = RawInput::Wheel {
        delta_x: 0.0,
        delta_y: 3.0,
        mode: WheelDeltaMode::Line,
        cancelable: true,
    };
    assert_eq!(
        normalize(&lines, Orientation::Vertical, &config).map(|e| e.delta),
        Some(30.0)
    );
    // Vertical-only movement never scrolls a horizontal picker.
    assert!(normalize(&lines, Orientation::Horizontal, &config).is_none());

    let pages = RawInput::Wheel {
        delta_x: -1.0,
        delta_y: 0.0,
        mode: WheelDeltaMode::Page,
        cancelable: true,
    };
    assert_eq!(
        normalize(&pages, Orientation::Horizontal, &config).map(|e| e.delta),
        Some(-300.0)
    );
}

#[test]
fn raw_input_kinds_cover_every_listener() {
    let kinds: Vec<_> = [
        RawInput::mouse(MousePhase::Down, 0.0, 0.0),
        RawInput::mouse(MousePhase::Move, 0.0, 0.0),
        RawInput::mouse(MousePhase::Up, 0.0, 0.0),
        RawInput::mouse(MousePhase::Leave, 0.0, 0.0),
        RawInput::touch(TouchPhase::Start, 0.0, 0.0),
        RawInput::touch(TouchPhase::Move, 0.0, 0.0),
        RawInput::touch(TouchPhase::End, 0.0, 0.0),
        RawInput::touch(TouchPhase::Cancel, 0.0, 0.0),
        RawInput::wheel(1.0, 0.0),
    ]
    .iter()
    .map(RawInput::kind)
    .collect();
    for kind in RawInputKind::ALL {
        assert!(kinds.contains(kind), "{kind:?} not produced");
    }
}

#[test]
fn attach_and_detach_are_symmetric() {
    let mut c = attached();
    assert!(c.is_listening());
    assert_eq!(c.display_offset(0), Some(80.0));

    let removed = c.detach();
    assert_eq!(removed, RawInputKind::ALL);
    assert!(!c.is_listening());
    assert!(c.detach().is_empty());

    // Detached controllers let every event through untouched.
    assert_eq!(
        c.dispatch(RawInput::wheel(5.0, 0.0), 0),
        Propagation::Allow
    );
    assert_eq!(c.picker().offset(), Some(80.0));
}

#[test]
fn repeated_attach_subscribes_once() {
    let mut c = attached();
    let mut wide = layout(5);
    wide.selection = Bounds::new(120.0, 0.0, 160.0, 40.0);

    assert!(c.attach(&wide).is_empty());
    assert_eq!(c.display_offset(0), Some(120.0));

    assert_eq!(c.detach(), RawInputKind::ALL);
    assert!(c.detach().is_empty());
    assert_eq!(c.attach(&layout(5)), RawInputKind::ALL);
}

#[test]
fn click_correction_is_eased_to_the_target() {
    let mut c = attached();
    click(&mut c, 150.0, 1_000);

    assert_eq!(c.picker().offset(), Some(40.0));
    assert!(c.is_animating());
    assert_eq!(c.next_wake(), Some(1_100));

    let mut last = 80.0;
    for now in [1_020, 1_040, 1_060, 1_080] {
        let shown = c.tick(now).unwrap();
        assert!(shown < last && shown > 40.0, "{shown} at {now}");
        last = shown;
    }

    assert_eq!(c.tick(1_100), Some(40.0));
    assert!(!c.is_animating());
    assert_eq!(c.picker().selected_value(), Some(&Value::from("B")));
    assert_eq!(c.next_wake(), None);
}

#[test]
fn drag_is_displayed_directly_and_release_is_eased() {
    let mut c = attached();
    c.dispatch(RawInput::mouse(MousePhase::Down, 100.0, 20.0), 0);
    c.dispatch(RawInput::mouse(MousePhase::Move, 90.0, 20.0), 10);
    assert!(!c.is_animating());
    assert_eq!(c.display_offset(10), Some(63.0));

    c.dispatch(RawInput::mouse(MousePhase::Up, 90.0, 20.0), 20);
    assert!(c.is_animating());
    assert_eq!(c.display_offset(20), Some(63.0));
    assert_eq!(c.tick(120), Some(80.0));
    assert_eq!(c.picker().selected_index(), 0);
}

#[test]
fn linear_easing_samples_proportionally() {
    let mut c = attached().with_easing(Easing::Linear);
    click(&mut c, 150.0, 0);
    assert_eq!(c.tick(50), Some(60.0));
}

#[test]
fn wheel_moves_without_tween_until_the_debounce_settles() {
    let mut c = attached();
    let p = c.dispatch(RawInput::wheel(5.0, 0.0), 0);
    assert!(p.prevents_default());
    assert!(!c.is_animating());
    assert_eq!(c.display_offset(0), Some(75.0));
    assert_eq!(c.next_wake(), Some(200));

    // The debounce fires a correction back to the nearest item.
    c.tick(200);
    assert!(c.is_animating());
    assert_eq!(c.tick(300), Some(80.0));
}

#[test]
fn relayout_jumps_without_animation() {
    let mut c = attached();
    click(&mut c, 150.0, 0);
    assert!(c.is_animating());

    let mut wide = layout(5);
    wide.frame = Bounds::new(0.0, 0.0, 400.0, 40.0);
    wide.selection = Bounds::new(180.0, 0.0, 220.0, 40.0);
    c.relayout(&wide);
    assert!(!c.is_animating());
    assert_eq!(c.display_offset(0), Some(140.0));
}

#[test]
fn easing_curves_hit_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseOut,
        Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mid = easing.sample(0.5);
        assert!(mid > 0.0 && mid < 1.0, "{easing:?}: {mid}");
    }
    let t = Tween::new(0.0, 10.0, 100, 0, Easing::Linear);
    assert_eq!(t.end_ms(), 101);
    assert_eq!(t.sample(500), 10.0);
}
