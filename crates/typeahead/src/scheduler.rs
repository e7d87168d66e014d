//! Debounced option lookups.
//!
//! [`FetchScheduler`] sits between text changes and the host's lookup
//! function. Every [`schedule`](FetchScheduler::schedule) call restarts a
//! single debounce timer; only the text passed to the last call before the
//! timer fires is looked up. Earlier calls are dropped without a lookup.
//!
//! When the timer fires the scheduler tags the lookup with the next sequence
//! number and runs it as its own task. Lookups that are already running are
//! never cancelled, so several can be in flight at once and may resolve out
//! of order. Each result is handed to the delivery callback together with
//! its sequence number; the state machine uses the number to drop stale
//! results.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures_util::future::BoxFuture;
use tracing::Instrument;
use typeahead_core::DelayedTask;
use typeahead_core::logging::targets;

use crate::error::{FetchError, Result};
use crate::item::TypeaheadItem;

/// The result type produced by a lookup.
pub type FetchResult<V> = std::result::Result<Vec<TypeaheadItem<V>>, FetchError>;

/// The host's asynchronous option lookup.
///
/// Given the current search text, resolve with the full replacement option
/// list, or fail. Any `Fn(String) -> impl Future<Output = FetchResult<V>>`
/// closure implements this trait.
pub trait OptionsCallback<V>: Send + Sync + 'static {
    /// Look up options for `search_value`.
    fn fetch(&self, search_value: String) -> BoxFuture<'static, FetchResult<V>>;
}

impl<V, F, Fut> OptionsCallback<V> for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = FetchResult<V>> + Send + 'static,
{
    fn fetch(&self, search_value: String) -> BoxFuture<'static, FetchResult<V>> {
        Box::pin(self(search_value))
    }
}

/// A finished lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResolution<V> {
    /// Position of the lookup in issue order, starting at 1.
    pub sequence: u64,
    /// The text that was looked up.
    pub search_value: String,
    /// The lookup outcome.
    pub result: FetchResult<V>,
}

type Deliver<V> = Arc<dyn Fn(FetchResolution<V>) + Send + Sync>;

/// Debounces text changes into lookups.
pub struct FetchScheduler<V> {
    callback: Arc<dyn OptionsCallback<V>>,
    deliver: Deliver<V>,
    timer: DelayedTask,
    issued: Arc<AtomicU64>,
}

impl<V: Send + 'static> FetchScheduler<V> {
    /// Create a scheduler on the current tokio runtime.
    ///
    /// `deliver` receives every lookup result, on a runtime worker.
    pub fn new<C, D>(debounce: Duration, callback: C, deliver: D) -> Result<Self>
    where
        C: OptionsCallback<V>,
        D: Fn(FetchResolution<V>) + Send + Sync + 'static,
    {
        Ok(Self {
            callback: Arc::new(callback),
            deliver: Arc::new(deliver),
            timer: DelayedTask::new(debounce)?,
            issued: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Restart the debounce window for `search_value`.
    ///
    /// A lookup scheduled earlier that has not started yet is dropped.
    pub fn schedule(&mut self, search_value: impl Into<String>) {
        let search_value = search_value.into();
        let callback = Arc::clone(&self.callback);
        let deliver = Arc::clone(&self.deliver);
        let issued = Arc::clone(&self.issued);

        tracing::trace!(target: targets::FETCH, search_value = %search_value, "lookup debounced");

        self.timer.schedule(move || {
            let sequence = issued.fetch_add(1, Ordering::SeqCst) + 1;
            tracing::debug!(target: targets::FETCH, sequence, search_value = %search_value, "issuing lookup");

            let lookup = callback.fetch(search_value.clone());
            let span = tracing::debug_span!(target: targets::FETCH, "lookup", sequence);
            tokio::spawn(
                async move {
                    let result = lookup.await;
                    match &result {
                        Ok(options) => {
                            tracing::debug!(target: targets::FETCH, count = options.len(), "lookup resolved")
                        }
                        Err(err) => {
                            tracing::warn!(target: targets::FETCH, error = %err, "lookup failed")
                        }
                    }
                    deliver(FetchResolution {
                        sequence,
                        search_value,
                        result,
                    });
                }
                .instrument(span),
            );
        });
    }

    /// Drop the pending lookup, if the debounce window is still open.
    ///
    /// Returns `true` if a pending lookup was dropped.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.timer.cancel();
        if cancelled {
            tracing::trace!(target: targets::FETCH, "pending lookup cancelled");
        }
        cancelled
    }

    /// Whether a lookup is waiting for the debounce window to close.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Number of lookups issued so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl<V> std::fmt::Debug for FetchScheduler<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchScheduler")
            .field("timer", &self.timer)
            .field("issued", &self.issued.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
