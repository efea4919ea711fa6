use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::Value;

/// A normalized option: a value plus the label shown for it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerOption {
    pub value: Value,
    pub name: String,
}

impl PickerOption {
    pub fn new(value: impl Into<Value>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
        }
    }
}

/// An option as supplied by the host: either already normalized or a bare primitive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawOption {
    Option(PickerOption),
    Primitive(Value),
}

impl RawOption {
    /// Bare primitives get their display string as the label; full options pass through.
    pub fn normalize(&self) -> PickerOption {
        match self {
            Self::Option(option) => option.clone(),
            Self::Primitive(value) => PickerOption {
                name: value.to_string(),
                value: value.clone(),
            },
        }
    }
}

impl From<PickerOption> for RawOption {
    fn from(option: PickerOption) -> Self {
        Self::Option(option)
    }
}

impl From<Value> for RawOption {
    fn from(value: Value) -> Self {
        Self::Primitive(value)
    }
}

macro_rules! raw_option_from_primitive {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawOption {
                fn from(value: $ty) -> Self {
                    Self::Primitive(Value::from(value))
                }
            }
        )*
    };
}

raw_option_from_primitive!(&str, String, bool, f32, f64, i32, i64, u32, u64);

pub fn normalize_options(raw: &[RawOption]) -> Vec<PickerOption> {
    raw.iter().map(RawOption::normalize).collect()
}

/// The shape of the rendered slot list: how many options there are and whether a leading
/// pseudo-item (placeholder or empty-state label) occupies the first slot.
///
/// Logical indexes run from [`Slots::floor`] to `count - 1`; index `-1` names the leading
/// pseudo-item when there is one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slots {
    pub count: usize,
    pub placeholder: bool,
}

#[allow(clippy::len_without_is_empty)]
impl Slots {
    pub fn new(count: usize, placeholder: bool) -> Self {
        Self { count, placeholder }
    }

    /// Whether slot 0 is a pseudo-item rather than an option.
    pub fn has_leading(&self) -> bool {
        self.placeholder || self.has_no_options()
    }

    /// Number of rendered item slots, pseudo-item included.
    pub fn len(&self) -> usize {
        self.count + usize::from(self.has_leading())
    }

    /// Whether there are no options; the rendered list still holds the empty-state slot.
    pub fn has_no_options(&self) -> bool {
        self.count == 0
    }

    /// The lowest selectable logical index.
    pub fn floor(&self) -> isize {
        if self.placeholder { -1 } else { 0 }
    }

    /// Clamps a logical index into `[floor, count - 1]`.
    ///
    /// An empty list without a placeholder clamps everything to `-1`.
    pub fn sanitize(&self, index: isize) -> isize {
        index.max(self.floor()).min(self.count as isize - 1)
    }

    /// Maps a slot position to a logical index.
    pub fn index_for_slot(&self, slot: usize) -> isize {
        slot as isize - isize::from(self.has_leading())
    }

    /// Maps a logical index to a slot position (may be out of range).
    pub fn slot_for_index(&self, index: isize) -> isize {
        index + isize::from(self.has_leading())
    }
}

/// Resolves the selection for an external value.
///
/// Returns the first option whose value matches under `eq`. Without a match, a non-empty list
/// without a placeholder falls back to index `0`; otherwise the result is `-1`.
pub fn resolve_index(
    options: &[PickerOption],
    value: Option<&Value>,
    placeholder: bool,
    eq: &dyn Fn(&Value, &Value) -> bool,
) -> isize {
    match find_index(options, value, eq) {
        Some(index) => index as isize,
        None if !placeholder && !options.is_empty() => 0,
        None => -1,
    }
}

/// First option matching `value`; `None` never matches anything.
pub fn find_index(
    options: &[PickerOption],
    value: Option<&Value>,
    eq: &dyn Fn(&Value, &Value) -> bool,
) -> Option<usize> {
    let value = value?;
    options.iter().position(|option| eq(&option.value, value))
}

/// The value selected by a logical index; `None` for `-1` (or anything out of range).
pub fn value_at(options: &[PickerOption], index: isize) -> Option<Value> {
    usize::try_from(index)
        .ok()
        .and_then(|i| options.get(i))
        .map(|option| option.value.clone())
}
