//! Error types for the core primitives.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A delayed task was created outside of a tokio runtime.
    #[error("No tokio runtime is available to drive timers")]
    NoRuntime,
}
