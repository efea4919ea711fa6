use alloc::vec::Vec;

use crate::gesture::GestureSession;
use crate::layout::abs;
use crate::model::{find_index, normalize_options, resolve_index, value_at};
use crate::{
    Geometry, HitZones, InputSource, LayoutSnapshot, MotionEvent, MotionKind, PickerOption,
    PickerOptions, PickerState, Point, Propagation, Slot, Slots, Step, Timer, Value,
};

/// A headless wheel-style picker engine.
///
/// The engine holds no UI objects:
/// - the host supplies layout through [`LayoutSnapshot`]s (`attach`, `relayout`)
/// - input arrives as normalized [`MotionEvent`]s (`handle`)
/// - time is a virtual millisecond clock: every call that may schedule work takes `now_ms`, and
///   `tick(now_ms)` fires due timers
/// - value changes are reported through `PickerOptions::on_change`
///
/// The committed index only changes when a correction settles (or live, while wheeling). An
/// emitted value is adopted as the new external value, as with a two-way binding.
#[derive(Clone, Debug)]
pub struct Picker {
    options: PickerOptions,
    items: Vec<PickerOption>,

    index: isize,
    value: Option<Value>,

    offset: Option<f32>,
    geometry: Geometry,
    zones: HitZones,
    attached: bool,
    // Index resolved by an option-list change, applied by the next layout pass.
    pending_layout: Option<isize>,

    session: Option<GestureSession>,
    transitioning: bool,
    settle: Timer<isize>,
    wheel_settle: Timer<()>,
}

impl Picker {
    pub fn new(options: PickerOptions) -> Self {
        let items = normalize_options(&options.items);
        let index = resolve_index(
            &items,
            options.value.as_ref(),
            options.has_placeholder(),
            &*options.value_eq,
        );
        let value = value_at(&items, index);
        pdebug!(count = items.len(), index, "Picker::new");
        Self {
            options,
            items,
            index,
            value,
            offset: None,
            geometry: Geometry::default(),
            zones: HitZones::default(),
            attached: false,
            pending_layout: None,
            session: None,
            transitioning: false,
            settle: Timer::new(),
            wheel_settle: Timer::new(),
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    /// Normalized options.
    pub fn items(&self) -> &[PickerOption] {
        &self.items
    }

    pub fn slots(&self) -> Slots {
        Slots::new(self.items.len(), self.options.has_placeholder())
    }

    /// Number of rendered item slots; a [`LayoutSnapshot`] must carry this many item boxes.
    pub fn slot_count(&self) -> usize {
        self.slots().len()
    }

    pub fn selected_index(&self) -> isize {
        self.index
    }

    pub fn selected_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Current list translation; `None` until laid out.
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|s| s.dragging)
    }

    /// Whether an option-list change is waiting for [`Picker::relayout`].
    pub fn needs_layout(&self) -> bool {
        self.pending_layout.is_some()
    }

    /// The earliest pending timer deadline, for hosts scheduling a real wake-up.
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.settle.due_ms(), self.wheel_settle.due_ms()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Index a pending correction will commit, if one is in flight.
    pub fn settle_target(&self) -> Option<isize> {
        self.settle.payload().copied()
    }

    pub fn state(&self) -> PickerState {
        PickerState {
            index: self.index,
            value: self.value.clone(),
            offset: self.offset,
            transitioning: self.transitioning,
        }
    }

    /// Visits rendered slots in order without allocating.
    pub fn for_each_slot(&self, mut f: impl FnMut(Slot<'_>)) {
        if let Some(label) = &self.options.placeholder {
            f(Slot::Placeholder {
                label,
                selected: self.index == -1,
            });
        } else if self.items.is_empty() {
            f(Slot::Empty {
                label: &self.options.empty_label,
            });
        }
        for (i, option) in self.items.iter().enumerate() {
            f(Slot::Option {
                index: i,
                option,
                selected: self.index == i as isize,
            });
        }
    }

    /// Clamps a logical index into the selectable range.
    pub fn sanitize_index(&self, index: isize) -> isize {
        self.slots().sanitize(index)
    }

    pub fn index_for_offset(&self, offset: f32) -> isize {
        self.geometry.index_for_offset(self.slots(), offset)
    }

    pub fn offset_for_index(&self, index: isize) -> f32 {
        self.geometry.offset_for_index(self.slots(), index)
    }

    // ---------------------------------------------------------------------------------------
    // Lifecycle and layout

    /// Mounts the picker: measures geometry, aligns the offset to the committed index, and
    /// reports the resolved value if it differs from the external one.
    pub fn attach(&mut self, snapshot: &LayoutSnapshot) {
        pdebug!(slots = self.slot_count(), "Picker::attach");
        self.attached = true;
        self.relayout(snapshot);
        if self.value != self.options.value {
            let value = self.value.clone();
            self.emit(value);
        }
    }

    /// Unmounts the picker. Pending timers and the gesture session are dropped; input is ignored
    /// until the next `attach`.
    pub fn detach(&mut self) {
        pdebug!("Picker::detach");
        self.attached = false;
        self.session = None;
        self.transitioning = false;
        self.settle.cancel();
        self.wheel_settle.cancel();
    }

    /// Recomputes pivots from a fresh layout.
    ///
    /// Call after the host's layout pass whenever item positions may have changed (resize), and
    /// after every option-list change (see [`Picker::needs_layout`]). A snapshot without item
    /// boxes is treated as "not laid out yet" and leaves the picker untouched.
    pub fn relayout(&mut self, snapshot: &LayoutSnapshot) {
        if !snapshot.is_laid_out() {
            pdebug!("relayout: snapshot not laid out, skipping");
            return;
        }
        let slots = self.slots();
        if snapshot.items.len() != slots.len() {
            pwarn!(
                items = snapshot.items.len(),
                slots = slots.len(),
                "relayout: item box count does not match rendered slots"
            );
        }

        self.geometry = Geometry::measure(snapshot, self.options.orientation);
        self.zones = HitZones::from_snapshot(snapshot);
        pdebug!(
            pivots = self.geometry.pivots().len(),
            scroll_min = self.geometry.scroll_min(),
            scroll_max = self.geometry.scroll_max(),
            "relayout"
        );

        if let Some(index) = self.pending_layout.take() {
            self.index = index;
            self.offset = Some(self.geometry.offset_for_index(slots, index));
            let value = value_at(&self.items, index);
            self.commit_value(value);
            return;
        }

        let target = self.settle_target().unwrap_or(self.index);
        self.offset = Some(self.geometry.offset_for_index(slots, target));
    }

    // ---------------------------------------------------------------------------------------
    // Value sync

    /// Replaces the options, running the option-list resync when the list (or placeholder
    /// presence) changed, else the external-value resync when the value changed.
    pub fn set_options(&mut self, options: PickerOptions, now_ms: u64) {
        let items_changed = options.items != self.options.items
            || options.has_placeholder() != self.options.has_placeholder();
        let value_changed = options.value != self.options.value;
        let next_value = options.value.clone();
        let prev_value = self.options.value.clone();
        self.options = options;

        if items_changed {
            self.resync_items();
        } else if value_changed {
            self.options.value = prev_value;
            self.set_value(next_value, now_ms);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, now_ms: u64, f: impl FnOnce(&mut PickerOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    pub fn set_items<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<crate::RawOption>,
    {
        self.options.items = items.into_iter().map(Into::into).collect();
        self.resync_items();
    }

    /// Writes the externally controlled value.
    ///
    /// - `None` with a placeholder corrects to `-1`.
    /// - A value matching no option is rejected: the current value is re-emitted.
    /// - Otherwise a different index starts a correction.
    ///
    /// Writing the value already held is a no-op.
    pub fn set_value(&mut self, value: Option<Value>, now_ms: u64) {
        if self.options.value == value {
            return;
        }
        ptrace!(?value, "set_value");
        self.options.value = value;

        if self.options.value.is_none() && self.options.has_placeholder() {
            self.correction(-1, now_ms);
            return;
        }

        match find_index(&self.items, self.options.value.as_ref(), &*self.options.value_eq) {
            None => {
                let current = self.value.clone();
                self.emit(current);
            }
            Some(index) if index as isize != self.index => {
                self.correction(index as isize, now_ms);
            }
            Some(_) => {}
        }
    }

    fn resync_items(&mut self) {
        self.items = normalize_options(&self.options.items);
        let index = resolve_index(
            &self.items,
            self.options.value.as_ref(),
            self.options.has_placeholder(),
            &*self.options.value_eq,
        );
        pdebug!(count = self.items.len(), index, "resync_items");
        self.pending_layout = Some(index);
    }

    fn commit_value(&mut self, value: Option<Value>) {
        if self.value == value {
            return;
        }
        self.value = value.clone();
        self.emit(value);
    }

    fn emit(&mut self, value: Option<Value>) {
        pdebug!(?value, "emit");
        if let Some(cb) = &self.options.on_change {
            cb(value.as_ref());
        }
        self.options.value = value;
    }

    // ---------------------------------------------------------------------------------------
    // Snap / correction

    /// Animates to `index` (sanitized) and commits it once the transition window elapses.
    ///
    /// A newer correction replaces a pending one. Returns the sanitized target.
    pub fn select_index(&mut self, index: isize, now_ms: u64) -> isize {
        self.correction(index, now_ms)
    }

    pub fn step(&mut self, step: Step, now_ms: u64) -> isize {
        self.correction(self.index + step.delta(), now_ms)
    }

    fn correction(&mut self, index: isize, now_ms: u64) -> isize {
        let slots = self.slots();
        let target = slots.sanitize(index);
        if !self.geometry.is_empty() {
            self.offset = Some(self.geometry.offset_for_index(slots, target));
        }
        self.transitioning = true;
        let due = now_ms.saturating_add(self.options.transition_ms);
        self.settle.arm(due, target);
        ptrace!(index, target, due, "correction");
        target
    }

    fn finish_settle(&mut self, target: isize) {
        let target = self.slots().sanitize(target);
        pdebug!(target, "settle");
        self.transitioning = false;
        self.index = target;
        let value = value_at(&self.items, target);
        self.commit_value(value);
    }

    fn finish_wheel_settle(&mut self, due_ms: u64) {
        let Some(offset) = self.offset else {
            return;
        };
        let index = self.index_for_offset(offset);
        self.correction(index, due_ms);
    }

    /// Fires every timer due at `now_ms`, earliest first.
    ///
    /// Work scheduled by a firing timer is timestamped with that timer's deadline, so a single
    /// late tick produces the same state as punctual ones.
    pub fn tick(&mut self, now_ms: u64) {
        loop {
            let settle = self.settle.due_ms().filter(|&due| due <= now_ms);
            let wheel = self.wheel_settle.due_ms().filter(|&due| due <= now_ms);
            match (settle, wheel) {
                (Some(s), Some(w)) if w < s => self.fire_wheel_settle(now_ms),
                (Some(_), _) => {
                    if let Some((_, target)) = self.settle.take_due(now_ms) {
                        self.finish_settle(target);
                    }
                }
                (None, Some(_)) => self.fire_wheel_settle(now_ms),
                (None, None) => break,
            }
        }
    }

    fn fire_wheel_settle(&mut self, now_ms: u64) {
        if let Some((due, ())) = self.wheel_settle.take_due(now_ms) {
            self.finish_wheel_settle(due);
        }
    }

    // ---------------------------------------------------------------------------------------
    // Gestures

    /// Feeds one normalized input event and reports whether the host should suppress the
    /// platform default action.
    ///
    /// Input is ignored (and allowed to propagate) while detached or while an option-list
    /// change awaits its layout pass.
    pub fn handle(&mut self, event: MotionEvent, now_ms: u64) -> Propagation {
        if !self.attached || self.pending_layout.is_some() {
            return Propagation::Allow;
        }
        ptrace!(kind = ?event.kind, source = ?event.source, delta = event.delta, "handle");
        match event.kind {
            MotionKind::Start => self.on_start(event),
            MotionKind::Move => self.on_move(event),
            MotionKind::End => self.on_end(event, now_ms),
            MotionKind::Cancel => self.on_cancel(now_ms),
            MotionKind::Wheel => return self.on_wheel(event, now_ms),
        }
        Propagation::prevent_if(event.cancelable)
    }

    fn on_start(&mut self, event: MotionEvent) {
        let Some(offset) = self.offset else {
            return;
        };
        let main = event.position.main(self.options.orientation);
        self.session = Some(GestureSession::begin(offset, main, event.source));
    }

    fn on_move(&mut self, event: MotionEvent) {
        let orientation = self.options.orientation;
        let threshold = self.options.drag_threshold;
        let sensitivity = match event.source {
            InputSource::Touch => self.options.touch_sensitivity,
            InputSource::Pointer | InputSource::Wheel => self.options.drag_sensitivity,
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let diff = event.position.main(orientation) - session.start_main;
        if !diff.is_finite() {
            pwarn!(diff, "on_move: non-finite pointer delta");
            return;
        }
        if abs(diff) > threshold {
            session.dragging = true;
        }
        // Overscroll is allowed while dragging; the release settles it.
        self.offset = Some(session.start_offset + diff * sensitivity);
    }

    fn on_end(&mut self, event: MotionEvent, now_ms: u64) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.dragging {
            self.settle_from_offset(now_ms);
        } else if session.primary_down {
            self.click(event.position, now_ms);
        }
    }

    fn on_cancel(&mut self, now_ms: u64) {
        self.session = None;
        self.settle_from_offset(now_ms);
    }

    fn settle_from_offset(&mut self, now_ms: u64) {
        if let Some(offset) = self.offset {
            let index = self.index_for_offset(offset);
            self.correction(index, now_ms);
        }
    }

    fn click(&mut self, p: Point, now_ms: u64) {
        if let Some(step) = self.zones.hit(p) {
            ptrace!(?step, "click");
            self.step(step, now_ms);
        }
    }

    fn on_wheel(&mut self, event: MotionEvent, now_ms: u64) -> Propagation {
        let Some(offset) = self.offset else {
            return Propagation::Allow;
        };
        let delta = event.delta;
        if !delta.is_finite() {
            pwarn!(delta, "on_wheel: non-finite delta");
            return Propagation::Allow;
        }

        // At a bound, let the page scroll instead.
        if offset >= self.geometry.scroll_min() && delta < 0.0 {
            return Propagation::Allow;
        }
        if offset <= self.geometry.scroll_max() && delta > 0.0 {
            return Propagation::Allow;
        }
        if self.geometry.pivots().len() == 1 {
            return Propagation::Allow;
        }

        let slots = self.slots();
        let forward = delta > 0.0;
        let next = slots.sanitize(self.index + if forward { 1 } else { -1 });
        // One tick never travels further than the gap to the adjacent item.
        let max_step = if forward {
            self.offset_for_index(next - 1) - self.offset_for_index(next)
        } else {
            self.offset_for_index(next) - self.offset_for_index(next + 1)
        };
        let delta = delta.min(max_step).max(-max_step);

        let offset = self
            .geometry
            .clamp_offset(offset - delta * self.options.scroll_sensitivity);
        self.offset = Some(offset);
        ptrace!(delta, offset, "wheel");

        let index = slots.sanitize(self.geometry.index_for_offset(slots, offset));
        self.index = index;
        let value = value_at(&self.items, index);
        self.commit_value(value);

        let due = now_ms.saturating_add(self.options.wheel_settle_delay_ms);
        self.wheel_settle.arm(due, ());

        Propagation::prevent_if(event.cancelable)
    }
}
