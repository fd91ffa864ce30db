//! Options for time-selection dropdowns.

use serde::{Deserialize, Serialize};

/// One entry in a time dropdown.
///
/// `value` is a zero-padded `HH:MM` key used for sorting and equality;
/// `label` is what the user sees in their preferred clock style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlotOption {
    pub label: String,
    pub value: String,
}

impl TimeSlotOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
