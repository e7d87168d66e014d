//! Error types for the typeahead widget.

use typeahead_core::CoreError;

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, TypeaheadError>;

/// Errors returned by the widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeaheadError {
    /// A commit targeted an index that is not in the current option list.
    ///
    /// This means the caller's idea of the list is out of sync with the
    /// widget's; the widget never clamps such an index.
    #[error("Selection index {index} is out of range for {len} options")]
    InvalidSelectionIndex { index: usize, len: usize },

    /// A core primitive failed (for example, no runtime to drive timers).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Failure reported by the host's option lookup.
///
/// The widget does not retry; the error is forwarded to the host through
/// the `fetch_failed` signal and the current option list is kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The lookup failed with a host-provided message.
    #[error("Option lookup failed: {0}")]
    Failed(String),
}

impl FetchError {
    /// Create a lookup failure from any displayable error.
    pub fn failed(message: impl std::fmt::Display) -> Self {
        Self::Failed(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TypeaheadError::InvalidSelectionIndex { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Selection index 3 is out of range for 2 options");

        let err = TypeaheadError::from(CoreError::NoRuntime);
        assert_eq!(err.to_string(), "No tokio runtime is available to drive timers");

        let err = FetchError::failed("503 Service Unavailable");
        assert_eq!(err.to_string(), "Option lookup failed: 503 Service Unavailable");
    }
}
