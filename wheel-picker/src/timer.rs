/// A single-slot scheduled task on a virtual millisecond clock.
///
/// Arming replaces whatever was pending; cancelling leaves nothing behind. The engine owns one
/// `Timer` per kind (settle, wheel debounce), which guarantees at most one pending task of each
/// kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer<T> {
    pending: Option<(u64, T)>,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Timer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, due_ms: u64, payload: T) {
        self.pending = Some((due_ms, payload));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, payload)| payload)
    }

    /// Takes the pending task if its deadline has been reached.
    pub fn take_due(&mut self, now_ms: u64) -> Option<(u64, T)> {
        match self.pending {
            Some((due, _)) if due <= now_ms => self.pending.take(),
            _ => None,
        }
    }
}
