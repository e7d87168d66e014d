//! Logging facilities.
//!
//! Everything is instrumented with the `tracing` crate. Nothing is printed
//! unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("typeahead=debug,typeahead_core=trace")
//!     .init();
//! ```
//!
//! Use the constants in [`targets`] to build filter directives for a single
//! subsystem.

/// Target names for log filtering.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "typeahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typeahead_core::signal";
    /// Delayed task target.
    pub const TIMER: &str = "typeahead_core::timer";
    /// Interaction state machine target.
    pub const STATE: &str = "typeahead::state";
    /// Option lookup and debounce target.
    pub const FETCH: &str = "typeahead::fetch";
    /// Widget facade target (event queue, mount lifecycle).
    pub const WIDGET: &str = "typeahead::widget";
    /// Performance spans.
    pub const PERF: &str = "typeahead::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a synchronous section such as applying a fetched
/// option list.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new performance span named after `operation`.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation);
        Self {
            _span: span.entered(),
        }
    }
}
