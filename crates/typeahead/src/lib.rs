//! An embeddable typeahead (autocomplete) input.
//!
//! The widget turns free-text keystrokes into debounced asynchronous option
//! lookups, lets the user walk the resulting list with the keyboard or the
//! pointer, and reports the chosen option back to the host. It does not
//! draw: the host supplies renderers and forwards input events.
//!
//! # Architecture
//!
//! - [`TypeaheadState`]: the synchronous interaction state machine (options,
//!   selection cursor, committed option, open state).
//! - [`FetchScheduler`]: debounces text changes into lookups and tags each
//!   lookup with a sequence number so stale results can be dropped.
//! - [`Typeahead`]: the facade that wires both together with a blur timer
//!   and outside-click detection, and funnels all background completions
//!   through one event queue.
//!
//! # Example
//!
//! ```ignore
//! use typeahead::{Key, Typeahead, TypeaheadConfig, TypeaheadItem};
//!
//! let mut widget = Typeahead::<u32>::new(TypeaheadConfig::default(), |search: String| async move {
//!     let options = lookup_cities(&search).await.map_err(typeahead::FetchError::failed)?;
//!     Ok(options)
//! })?;
//!
//! widget.option_chosen().connect(|city| println!("Selected {}", city.text()));
//!
//! widget.on_focus();
//! widget.on_text_changed("ber");
//! widget.process_next().await;
//! widget.on_key_down(Key::ArrowDown)?;
//! widget.on_key_down(Key::Enter)?;
//! ```
//!
//! # Logging
//!
//! All events are emitted through `tracing` under the targets listed in
//! [`typeahead_core::logging::targets`].

pub mod config;
pub mod error;
pub mod item;
pub mod key;
pub mod matching;
pub mod region;
pub mod render;
pub mod scheduler;
pub mod selection;
pub mod state;
pub mod widget;

pub use config::{DEFAULT_BLUR_GRACE, DEFAULT_DEBOUNCE, OptionListStyle, TypeaheadConfig};
pub use error::{FetchError, Result, TypeaheadError};
pub use item::TypeaheadItem;
pub use key::Key;
pub use region::{RegionFn, RootRegion};
pub use render::{InputRenderer, InputView, OptionListRenderer, OptionListView, TextRenderer};
pub use scheduler::{FetchResolution, FetchResult, FetchScheduler, OptionsCallback};
pub use selection::SelectionIndex;
pub use state::{CommitOutcome, FetchOutcome, TypeaheadState};
pub use widget::{EventOutcome, Typeahead, WidgetEvent};

pub use typeahead_core::{CoreError, Point, Rect, Signal};
