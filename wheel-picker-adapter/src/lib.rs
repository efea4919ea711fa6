//! Host adapter utilities for the `wheel-picker` crate.
//!
//! The `wheel-picker` engine is UI-agnostic and consumes normalized motion events on a virtual
//! clock. This crate provides the small, framework-neutral pieces most hosts need around it:
//!
//! - Raw mouse/touch/wheel input → normalized motion events (including wheel delta modes)
//! - A `Controller` that owns a picker, drives its timers and tracks listener attach/detach
//! - Tween helpers for displaying the correction transition (optional; host-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM or windowing bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod input;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use input::{
    InputConfig, MouseButton, MousePhase, RawInput, RawInputKind, TouchPhase, WheelDeltaMode,
    normalize,
};
pub use tween::{Easing, Tween};
