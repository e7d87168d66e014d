//! Core primitives for the typeahead widget.
//!
//! This crate provides the building blocks the widget crate is assembled from:
//!
//! - **Signal/Slot System**: Type-safe notification of host callbacks
//! - **Property System**: Change-detecting state cells
//! - **Delayed Tasks**: Cancellable one-shot timers on the tokio runtime
//! - **Geometry**: Points and rectangles used for hit testing
//! - **Logging**: Tracing targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use typeahead_core::Signal;
//!
//! let text_changed = Signal::<String>::new();
//!
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! text_changed.emit("ab".to_string());
//! text_changed.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use typeahead_core::{Property, Signal};
//!
//! struct Panel {
//!     open: Property<bool>,
//!     open_changed: Signal<bool>,
//! }
//!
//! impl Panel {
//!     fn show(&self) {
//!         self.open.set_notify(true, &self.open_changed);
//!     }
//! }
//!
//! let panel = Panel { open: Property::new(false), open_changed: Signal::new() };
//! panel.show();
//! assert!(panel.open.get());
//! ```

mod error;
pub mod logging;
pub mod property;
pub mod signal;
pub mod timer;
pub mod types;

pub use error::{CoreError, Result};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::DelayedTask;
pub use types::{Color, Point, Rect, Size};
