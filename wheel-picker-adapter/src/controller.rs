use wheel_picker::{LayoutSnapshot, Picker, PickerOptions, Propagation, Value};

use crate::{Easing, InputConfig, RawInput, RawInputKind, Tween, normalize};

/// A framework-neutral controller that owns a [`Picker`] and covers the common host workflows.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `attach` / `detach` when the view is mounted/unmounted (and (un)subscribe the returned
///   listener kinds)
/// - `dispatch` for every raw input event
/// - `relayout` after layout passes that may have moved items
/// - `tick(now_ms)` each frame, or at `next_wake`
///
/// While a correction is in flight the engine already reports the target offset; `tick` and
/// `display_offset` return an eased offset travelling there, for hosts that animate the list
/// themselves instead of using a CSS-style transition.
#[derive(Clone, Debug)]
pub struct Controller {
    picker: Picker,
    input: InputConfig,
    easing: Easing,
    tween: Option<Tween>,
    display: Option<f32>,
    target: Option<f32>,
    listening: bool,
}

impl Controller {
    pub fn new(options: PickerOptions) -> Self {
        Self::from_picker(Picker::new(options))
    }

    pub fn from_picker(picker: Picker) -> Self {
        let offset = picker.offset();
        Self {
            picker,
            input: InputConfig::default(),
            easing: Easing::default(),
            tween: None,
            display: offset,
            target: offset,
            listening: false,
        }
    }

    pub fn with_input_config(mut self, input: InputConfig) -> Self {
        self.input = input;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Direct engine access; display state catches up on the next `tick`.
    pub fn picker_mut(&mut self) -> &mut Picker {
        &mut self.picker
    }

    pub fn into_picker(self) -> Picker {
        self.picker
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Mounts the picker and returns the listener kinds the host must subscribe.
    ///
    /// Attaching again while listening only re-measures and returns an empty list, so every
    /// subscription is matched by exactly one `detach`.
    pub fn attach(&mut self, snapshot: &LayoutSnapshot) -> &'static [RawInputKind] {
        if self.listening {
            self.relayout(snapshot);
            return &[];
        }
        self.picker.attach(snapshot);
        self.jump_to_target();
        self.listening = true;
        RawInputKind::ALL
    }

    /// Unmounts the picker and returns the same listener kinds `attach` handed out, so the host
    /// can unsubscribe exactly what it subscribed. Returns an empty list when not attached.
    pub fn detach(&mut self) -> &'static [RawInputKind] {
        if !self.listening {
            return &[];
        }
        self.picker.detach();
        self.tween = None;
        self.listening = false;
        RawInputKind::ALL
    }

    /// Re-measures after a host layout pass (resize, option-list change). Never animated.
    pub fn relayout(&mut self, snapshot: &LayoutSnapshot) {
        self.picker.relayout(snapshot);
        self.jump_to_target();
    }

    pub fn set_value(&mut self, value: Option<Value>, now_ms: u64) {
        self.picker.set_value(value, now_ms);
        self.sync_display(now_ms);
    }

    pub fn set_options(&mut self, options: PickerOptions, now_ms: u64) {
        self.picker.set_options(options, now_ms);
        self.sync_display(now_ms);
    }

    /// Normalizes and feeds one platform event.
    pub fn dispatch(&mut self, raw: RawInput, now_ms: u64) -> Propagation {
        if !self.listening {
            return Propagation::Allow;
        }
        let Some(event) = normalize(&raw, self.picker.options().orientation, &self.input) else {
            return Propagation::Allow;
        };
        let propagation = self.picker.handle(event, now_ms);
        self.sync_display(now_ms);
        propagation
    }

    /// Fires due engine timers and advances the display tween.
    ///
    /// Returns the offset to display, if laid out.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.picker.tick(now_ms);
        self.sync_display(now_ms);
        if let Some(tween) = self.tween {
            if tween.is_done(now_ms) {
                self.tween = None;
                self.display = Some(tween.to);
            }
        }
        self.display_offset(now_ms)
    }

    pub fn display_offset(&self, now_ms: u64) -> Option<f32> {
        match self.tween {
            Some(tween) => Some(tween.sample(now_ms)),
            None => self.display,
        }
    }

    /// The next time `tick` has work to do: an engine deadline, or the end of the display tween.
    pub fn next_wake(&self) -> Option<u64> {
        let tween_end = self.tween.map(|t| t.end_ms());
        match (self.picker.next_deadline(), tween_end) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn jump_to_target(&mut self) {
        self.tween = None;
        self.target = self.picker.offset();
        self.display = self.target;
    }

    fn sync_display(&mut self, now_ms: u64) {
        let target = self.picker.offset();
        if target == self.target {
            return;
        }
        let from = self.display_offset(now_ms);
        self.target = target;

        let animated = self.picker.is_transitioning() && !self.picker.is_dragging();
        match (from, target) {
            (Some(from), Some(to)) if animated => {
                let duration = self.picker.options().transition_ms;
                self.tween = Some(Tween::new(from, to, now_ms, duration, self.easing));
            }
            _ => {
                self.tween = None;
                self.display = target;
            }
        }
    }
}
