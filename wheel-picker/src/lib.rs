//! A headless engine for wheel-style value pickers.
//!
//! For host glue (raw platform input, timer driving, eased display offsets), see the
//! `wheel-picker-adapter` crate.
//!
//! A picker is a translated strip of discrete options with a fixed selection window; exactly one
//! option (or the placeholder) is selected at a time. This crate owns the interaction state:
//! pivot geometry, offset ↔ index mapping, a single reducer over normalized drag/touch/wheel
//! events, and the snap/settle state machine that turns continuous scrolling into a committed,
//! externally observable value.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - layout snapshots (item, selection window and click-zone boxes)
//! - normalized input events
//! - a millisecond clock for `tick`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod gesture;
mod layout;
mod model;
mod options;
mod picker;
mod state;
mod timer;
mod types;
mod value;


pub use gesture::{InputSource, MotionEvent, MotionKind, Propagation};
pub use layout::{Geometry, HitZones, LayoutSnapshot, Step};
pub use model::{PickerOption, RawOption, Slots, normalize_options, resolve_index};
pub use options::{
    DEFAULT_DRAG_SENSITIVITY, DEFAULT_DRAG_THRESHOLD, DEFAULT_EMPTY_LABEL,
    DEFAULT_SCROLL_SENSITIVITY, DEFAULT_TOUCH_SENSITIVITY, DEFAULT_TRANSITION_MS,
    DEFAULT_WHEEL_SETTLE_DELAY_MS, OnValueChange, PickerOptions, ValueEq,
};
pub use picker::Picker;
pub use state::{PickerState, Slot};
pub use timer::Timer;
pub use types::{Bounds, Orientation, Point};
pub use value::Value;
