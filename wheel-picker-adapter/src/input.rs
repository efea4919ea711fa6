use wheel_picker::{InputSource, MotionEvent, MotionKind, Orientation, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MousePhase {
    Down,
    Move,
    Up,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// Unit of a wheel delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// A platform input event, before normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawInput {
    Mouse {
        phase: MousePhase,
        position: Point,
        button: MouseButton,
        cancelable: bool,
    },
    /// `changed` is the first changed touch point, `touch` the first active one.
    Touch {
        phase: TouchPhase,
        changed: Option<Point>,
        touch: Option<Point>,
        cancelable: bool,
    },
    Wheel {
        delta_x: f32,
        delta_y: f32,
        mode: WheelDeltaMode,
        cancelable: bool,
    },
}

/// The listener kinds a host subscribes to while a picker is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RawInputKind {
    MouseDown,
    MouseMove,
    MouseUp,
    MouseLeave,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    Wheel,
}

impl RawInputKind {
    pub const ALL: &'static [RawInputKind] = &[
        Self::TouchStart,
        Self::TouchMove,
        Self::TouchEnd,
        Self::TouchCancel,
        Self::Wheel,
        Self::MouseDown,
        Self::MouseMove,
        Self::MouseUp,
        Self::MouseLeave,
    ];
}

impl RawInput {
    pub fn mouse(phase: MousePhase, x: f32, y: f32) -> Self {
        Self::Mouse {
            phase,
            position: Point::new(x, y),
            button: MouseButton::Primary,
            cancelable: true,
        }
    }

    pub fn touch(phase: TouchPhase, x: f32, y: f32) -> Self {
        Self::Touch {
            phase,
            changed: Some(Point::new(x, y)),
            touch: None,
            cancelable: true,
        }
    }

    pub fn wheel(delta_x: f32, delta_y: f32) -> Self {
        Self::Wheel {
            delta_x,
            delta_y,
            mode: WheelDeltaMode::Pixel,
            cancelable: true,
        }
    }

    pub fn kind(&self) -> RawInputKind {
        match *self {
            Self::Mouse { phase, .. } => match phase {
                MousePhase::Down => RawInputKind::MouseDown,
                MousePhase::Move => RawInputKind::MouseMove,
                MousePhase::Up => RawInputKind::MouseUp,
                MousePhase::Leave => RawInputKind::MouseLeave,
            },
            Self::Touch { phase, .. } => match phase {
                TouchPhase::Start => RawInputKind::TouchStart,
                TouchPhase::Move => RawInputKind::TouchMove,
                TouchPhase::End => RawInputKind::TouchEnd,
                TouchPhase::Cancel => RawInputKind::TouchCancel,
            },
            Self::Wheel { .. } => RawInputKind::Wheel,
        }
    }
}

/// Pixel sizes used to convert line/page wheel deltas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputConfig {
    pub line_height: f32,
    pub page_size: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            line_height: 16.0,
            page_size: 400.0,
        }
    }
}

/// Maps a platform event onto the engine's motion model.
///
/// Returns `None` for events the picker never reacts to: non-primary mouse presses, touch
/// events without any touch point, and wheel events with no movement along the scroll axis.
pub fn normalize(
    raw: &RawInput,
    orientation: Orientation,
    config: &InputConfig,
) -> Option<MotionEvent> {
    match *raw {
        RawInput::Mouse {
            phase,
            position,
            button,
            cancelable,
        } => {
            let kind = match phase {
                MousePhase::Down | MousePhase::Up if button != MouseButton::Primary => return None,
                MousePhase::Down => MotionKind::Start,
                MousePhase::Move => MotionKind::Move,
                MousePhase::Up => MotionKind::End,
                MousePhase::Leave => MotionKind::Cancel,
            };
            Some(MotionEvent::new(kind, InputSource::Pointer, position).with_cancelable(cancelable))
        }
        RawInput::Touch {
            phase,
            changed,
            touch,
            cancelable,
        } => {
            let point = changed.or(touch);
            let (kind, position) = match phase {
                TouchPhase::Start => (MotionKind::Start, point?),
                TouchPhase::Move => (MotionKind::Move, point?),
                TouchPhase::End => (MotionKind::End, point?),
                TouchPhase::Cancel => (MotionKind::Cancel, point.unwrap_or_default()),
            };
            Some(MotionEvent::new(kind, InputSource::Touch, position).with_cancelable(cancelable))
        }
        RawInput::Wheel {
            delta_x,
            delta_y,
            mode,
            cancelable,
        } => {
            let delta = match orientation {
                Orientation::Horizontal => delta_x,
                Orientation::Vertical => delta_y,
            };
            if delta == 0.0 {
                return None;
            }
            let scale = match mode {
                WheelDeltaMode::Pixel => 1.0,
                WheelDeltaMode::Line => config.line_height,
                WheelDeltaMode::Page => config.page_size,
            };
            Some(MotionEvent::wheel(delta * scale).with_cancelable(cancelable))
        }
    }
}
