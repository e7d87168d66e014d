//! Selectable options.

/// A single selectable option returned by the lookup callback.
///
/// `value` identifies the option (two options with equal values are the same
/// choice); `text` is the label shown in the list and written back into the
/// input when the option is committed. Items are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeaheadItem<V> {
    text: String,
    value: V,
}

impl<V> TypeaheadItem<V> {
    /// Create a new item.
    pub fn new(text: impl Into<String>, value: V) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    /// The human-readable label.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The identity key.
    pub fn value(&self) -> &V {
        &self.value
    }
}

impl<V: PartialEq> TypeaheadItem<V> {
    /// Whether both items identify the same choice.
    pub fn same_value(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: Into<String>, V> From<(S, V)> for TypeaheadItem<V> {
    fn from((text, value): (S, V)) -> Self {
        Self::new(text, value)
    }
}
