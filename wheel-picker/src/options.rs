use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Orientation, RawOption, Value};

/// A callback fired when the committed selected value changes (`None` = no selection).
pub type OnValueChange = Arc<dyn Fn(Option<&Value>) + Send + Sync>;

/// The equality used to match the external value against option values.
///
/// The first argument is the option's value, the second the external value.
pub type ValueEq = Arc<dyn Fn(&Value, &Value) -> bool + Send + Sync>;

pub const DEFAULT_DRAG_SENSITIVITY: f32 = 1.7;
pub const DEFAULT_TOUCH_SENSITIVITY: f32 = 1.7;
pub const DEFAULT_SCROLL_SENSITIVITY: f32 = 1.0;
pub const DEFAULT_EMPTY_LABEL: &str = "No Items";
/// Pointer travel (px) beyond which a press becomes a drag instead of a click.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 1.5;
/// Duration of the visual correction transition, after which the index is committed.
pub const DEFAULT_TRANSITION_MS: u64 = 100;
/// Quiet period after the last wheel event before the offset is snapped to a pivot.
pub const DEFAULT_WHEEL_SETTLE_DELAY_MS: u64 = 200;

/// Configuration for [`crate::Picker`].
///
/// Cheap to clone: closures are stored in `Arc`s, so hosts can tweak a field and call
/// `Picker::set_options` without rebuilding callbacks.
pub struct PickerOptions {
    pub items: Vec<RawOption>,
    /// Externally controlled selection.
    pub value: Option<Value>,

    pub drag_sensitivity: f32,
    pub touch_sensitivity: f32,
    pub scroll_sensitivity: f32,

    /// Label of the pseudo-item shown when there are no options and no placeholder.
    pub empty_label: String,
    /// Enables the `-1` "unselected" state, rendered with this label.
    pub placeholder: Option<String>,

    pub orientation: Orientation,

    pub drag_threshold: f32,
    pub transition_ms: u64,
    pub wheel_settle_delay_ms: u64,

    pub value_eq: ValueEq,
    pub on_change: Option<OnValueChange>,
}

impl Clone for PickerOptions {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            value: self.value.clone(),
            drag_sensitivity: self.drag_sensitivity,
            touch_sensitivity: self.touch_sensitivity,
            scroll_sensitivity: self.scroll_sensitivity,
            empty_label: self.empty_label.clone(),
            placeholder: self.placeholder.clone(),
            orientation: self.orientation,
            drag_threshold: self.drag_threshold,
            transition_ms: self.transition_ms,
            wheel_settle_delay_ms: self.wheel_settle_delay_ms,
            value_eq: Arc::clone(&self.value_eq),
            on_change: self.on_change.clone(),
        }
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            value: None,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            touch_sensitivity: DEFAULT_TOUCH_SENSITIVITY,
            scroll_sensitivity: DEFAULT_SCROLL_SENSITIVITY,
            empty_label: String::from(DEFAULT_EMPTY_LABEL),
            placeholder: None,
            orientation: Orientation::default(),
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            transition_ms: DEFAULT_TRANSITION_MS,
            wheel_settle_delay_ms: DEFAULT_WHEEL_SETTLE_DELAY_MS,
            value_eq: Arc::new(Value::loose_eq),
            on_change: None,
        }
    }
}

impl PickerOptions {
    /// Creates options for a list of options (or bare primitives).
    pub fn new<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RawOption>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: Option<impl Into<Value>>) -> Self {
        self.value = value.map(Into::into);
        self
    }

    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    pub fn with_touch_sensitivity(mut self, sensitivity: f32) -> Self {
        self.touch_sensitivity = sensitivity;
        self
    }

    pub fn with_scroll_sensitivity(mut self, sensitivity: f32) -> Self {
        self.scroll_sensitivity = sensitivity;
        self
    }

    pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: Option<impl Into<String>>) -> Self {
        self.placeholder = placeholder.map(Into::into);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: f32) -> Self {
        self.drag_threshold = threshold;
        self
    }

    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }

    pub fn with_wheel_settle_delay_ms(mut self, ms: u64) -> Self {
        self.wheel_settle_delay_ms = ms;
        self
    }

    /// Replaces the value matcher, e.g. `Value::eq` for strict comparison.
    pub fn with_value_eq(
        mut self,
        eq: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.value_eq = Arc::new(eq);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(Option<&Value>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub(crate) fn has_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}

impl core::fmt::Debug for PickerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PickerOptions")
            .field("items", &self.items)
            .field("value", &self.value)
            .field("drag_sensitivity", &self.drag_sensitivity)
            .field("touch_sensitivity", &self.touch_sensitivity)
            .field("scroll_sensitivity", &self.scroll_sensitivity)
            .field("empty_label", &self.empty_label)
            .field("placeholder", &self.placeholder)
            .field("orientation", &self.orientation)
            .field("drag_threshold", &self.drag_threshold)
            .field("transition_ms", &self.transition_ms)
            .field("wheel_settle_delay_ms", &self.wheel_settle_delay_ms)
            .finish_non_exhaustive()
    }
}
