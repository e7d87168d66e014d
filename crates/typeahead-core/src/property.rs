//! Change-detecting properties.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually
//! changed it. Pair it with a [`Signal`] to notify listeners only on real
//! transitions; [`Property::set_notify`] does both in one call.
//!
//! # Example
//!
//! ```
//! use typeahead_core::{Property, Signal};
//!
//! let open = Property::new(false);
//! let open_changed = Signal::<bool>::new();
//!
//! assert!(open.set_notify(true, &open_changed));
//! // Writing the same value again is not a change.
//! assert!(!open.set_notify(true, &open_changed));
//! ```

use std::fmt;

use parking_lot::RwLock;

use crate::signal::Signal;

/// A value cell with change detection.
///
/// Interior mutability through a `RwLock` keeps reads cheap and lets the
/// property be shared behind `&self`.
pub struct Property<T> {
    value: RwLock<T>,
}

static_assertions::assert_impl_all!(Property<bool>: Send, Sync);

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Store `value`, returning `true` if it differs from the current value.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current == value {
            return false;
        }
        *current = value;
        true
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Store `value` and emit it on `changed` when it differs from the
    /// current value.
    ///
    /// The write lock is released before the signal is emitted, so slots may
    /// read the property.
    pub fn set_notify(&self, value: T, changed: &Signal<T>) -> bool {
        if !self.set(value.clone()) {
            return false;
        }
        changed.emit(value);
        true
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .finish()
    }
}
