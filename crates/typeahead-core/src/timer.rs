//! Cancellable one-shot timers.
//!
//! A [`DelayedTask`] owns at most one pending timer. Scheduling a new task
//! replaces (aborts) the previous one if it has not fired yet, which is the
//! "last call wins" behavior a debouncer needs. Once a timer fires, its task
//! runs to completion; only the waiting period can be cancelled.
//!
//! Timers run on the tokio runtime that was current when the `DelayedTask`
//! was created.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use typeahead_core::DelayedTask;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> typeahead_core::Result<()> {
//! let mut timer = DelayedTask::new(Duration::from_millis(250))?;
//! timer.schedule(|| println!("first"));
//! // Replaces the first task before it fires.
//! timer.schedule(|| println!("second"));
//! assert!(timer.is_pending());
//! timer.cancel();
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::{CoreError, Result};
use crate::logging::targets;

/// A cancellable, replaceable one-shot timer.
#[derive(Debug)]
pub struct DelayedTask {
    runtime: Handle,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    /// Number of tasks scheduled so far, used to correlate log lines.
    generation: u64,
}

impl DelayedTask {
    /// Create a timer bound to the current tokio runtime.
    ///
    /// Fails with [`CoreError::NoRuntime`] when called outside a runtime.
    pub fn new(delay: Duration) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| CoreError::NoRuntime)?;
        Ok(Self {
            runtime,
            delay,
            pending: None,
            generation: 0,
        })
    }

    /// Schedule `task` to run once after the configured delay.
    ///
    /// Any task that is still waiting is cancelled first.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let replaced = self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let delay = self.delay;

        tracing::trace!(
            target: targets::TIMER,
            generation,
            replaced,
            delay_ms = delay.as_millis() as u64,
            "timer scheduled"
        );

        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(target: targets::TIMER, generation, "timer fired");
            task();
        }));
    }

    /// Cancel the waiting task, if any.
    ///
    /// Returns `true` if a task was waiting and has been cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::trace!(target: targets::TIMER, generation = self.generation, "timer cancelled");
                true
            }
            _ => false,
        }
    }

    /// Whether a scheduled task is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
