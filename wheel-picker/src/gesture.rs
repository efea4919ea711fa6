use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionKind {
    Start,
    Move,
    End,
    Cancel,
    Wheel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputSource {
    Pointer,
    Touch,
    Wheel,
}

/// One normalized input event.
///
/// `position` is the pointer (or first touch point) position; `delta` is the signed wheel delta
/// along the scroll axis and is ignored for non-wheel kinds. `cancelable` reports whether the
/// host can suppress the event's default action.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionEvent {
    pub kind: MotionKind,
    pub source: InputSource,
    pub position: Point,
    pub delta: f32,
    pub cancelable: bool,
}

impl MotionEvent {
    pub fn new(kind: MotionKind, source: InputSource, position: Point) -> Self {
        Self {
            kind,
            source,
            position,
            delta: 0.0,
            cancelable: true,
        }
    }

    pub fn pointer(kind: MotionKind, x: f32, y: f32) -> Self {
        Self::new(kind, InputSource::Pointer, Point::new(x, y))
    }

    pub fn touch(kind: MotionKind, x: f32, y: f32) -> Self {
        Self::new(kind, InputSource::Touch, Point::new(x, y))
    }

    pub fn wheel(delta: f32) -> Self {
        Self {
            delta,
            ..Self::new(MotionKind::Wheel, InputSource::Wheel, Point::default())
        }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }
}

/// What the host should do with the originating platform event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Suppress the default action (native scroll, text selection, ...).
    PreventDefault,
    /// Leave the event alone, e.g. to let a wheel scroll the page at a bound.
    Allow,
}

impl Propagation {
    pub(crate) fn prevent_if(cancelable: bool) -> Self {
        if cancelable {
            Self::PreventDefault
        } else {
            Self::Allow
        }
    }

    pub fn prevents_default(self) -> bool {
        self == Self::PreventDefault
    }
}

/// Per-interaction state, alive from start until release/cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GestureSession {
    pub start_offset: f32,
    pub start_main: f32,
    pub dragging: bool,
    pub primary_down: bool,
}

impl GestureSession {
    pub fn begin(start_offset: f32, start_main: f32, source: InputSource) -> Self {
        Self {
            start_offset,
            start_main,
            dragging: false,
            primary_down: source == InputSource::Pointer,
        }
    }
}
