use crate::Value;

/// A lightweight, serializable snapshot of the picker's externally visible state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerState {
    /// Committed logical index (`-1` = placeholder / empty).
    pub index: isize,
    pub value: Option<Value>,
    /// List translation; `None` until the first layout pass.
    pub offset: Option<f32>,
    /// Whether a correction transition is in flight.
    pub transitioning: bool,
}

/// One rendered item slot, as visited by `Picker::for_each_slot`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Slot<'a> {
    Placeholder { label: &'a str, selected: bool },
    Empty { label: &'a str },
    Option {
        index: usize,
        option: &'a crate::PickerOption,
        selected: bool,
    },
}

impl Slot<'_> {
    pub fn label(&self) -> &str {
        match self {
            Self::Placeholder { label, .. } | Self::Empty { label } => *label,
            Self::Option { option, .. } => option.name.as_str(),
        }
    }

    /// The empty-state slot always renders as selected.
    pub fn is_selected(&self) -> bool {
        match *self {
            Self::Placeholder { selected, .. } | Self::Option { selected, .. } => selected,
            Self::Empty { .. } => true,
        }
    }
}
