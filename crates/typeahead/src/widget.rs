//! The typeahead widget.
//!
//! [`Typeahead`] composes the [`TypeaheadState`] with a debounced
//! [`FetchScheduler`], a blur grace timer and an optional outside-click
//! subscription. Background work (lookups, timers, global pointer presses)
//! never touches the state directly: it posts a [`WidgetEvent`] on the
//! widget's queue, and the host applies queued events on its own thread with
//! [`process_pending`](Typeahead::process_pending) or
//! [`process_next`](Typeahead::process_next).
//!
//! # Example
//!
//! ```ignore
//! use typeahead::{Typeahead, TypeaheadConfig, TypeaheadItem, TextRenderer};
//!
//! let mut widget = Typeahead::<u32>::new(TypeaheadConfig::default(), |search: String| async move {
//!     Ok(vec![TypeaheadItem::new(format!("{search} street"), 1)])
//! })?;
//!
//! widget.option_chosen().connect(|option| println!("chose {}", option.text()));
//! widget.on_focus();
//! widget.on_text_changed("Main");
//! widget.process_next().await;
//!
//! let (mut input, mut list) = (TextRenderer::new(), TextRenderer::new());
//! widget.render(&mut input, &mut list);
//! ```

use tokio::sync::mpsc;
use typeahead_core::logging::targets;
use typeahead_core::{ConnectionGuard, DelayedTask, Point, Signal};

use crate::config::TypeaheadConfig;
use crate::error::{FetchError, Result};
use crate::item::TypeaheadItem;
use crate::key::Key;
use crate::region::RootRegion;
use crate::render::{InputRenderer, InputView, OptionListRenderer, OptionListView};
use crate::scheduler::{FetchResolution, FetchScheduler, OptionsCallback};
use crate::selection::SelectionIndex;
use crate::state::{CommitOutcome, FetchOutcome, TypeaheadState};

/// Work posted to the widget by background tasks.
#[derive(Debug)]
pub enum WidgetEvent<V> {
    /// A lookup finished.
    FetchResolved(FetchResolution<V>),
    /// The blur grace delay armed with `generation` elapsed.
    BlurElapsed { generation: u64 },
    /// The global pointer source reported a press.
    PointerPressed(Point),
}

/// What applying one queued event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A lookup result replaced the option list.
    FetchApplied {
        sequence: u64,
        matched: Option<usize>,
    },
    /// A lookup result arrived after a newer one and was dropped.
    FetchDiscarded { sequence: u64 },
    /// A lookup failed; the option list was kept.
    FetchFailed { sequence: u64 },
    /// The blur grace delay elapsed. `closed` is false if a focus or a newer
    /// blur superseded it, or the panel was already closed.
    BlurElapsed { closed: bool },
    /// A global pointer press was handled.
    PointerPressed { closed: bool },
}

/// An autocomplete text input.
///
/// `V` is the option value type; options with equal values are the same
/// choice.
pub struct Typeahead<V> {
    config: TypeaheadConfig,
    state: TypeaheadState<V>,
    scheduler: FetchScheduler<V>,
    blur_timer: DelayedTask,
    blur_generation: u64,
    events_tx: mpsc::UnboundedSender<WidgetEvent<V>>,
    events_rx: mpsc::UnboundedReceiver<WidgetEvent<V>>,
    root: Option<Box<dyn RootRegion + Send + Sync>>,
    outside_clicks: Option<ConnectionGuard<Point>>,

    /// Emitted with the raw text on every text change.
    pub text_changed: Signal<String>,
    /// Emitted when a lookup fails.
    pub fetch_failed: Signal<FetchError>,
}

static_assertions::assert_impl_all!(Typeahead<u32>: Send);

impl<V: Clone + PartialEq + Send + 'static> Typeahead<V> {
    /// Create a widget on the current tokio runtime.
    ///
    /// Fails with [`CoreError::NoRuntime`](typeahead_core::CoreError::NoRuntime)
    /// outside of a runtime.
    pub fn new<C>(config: TypeaheadConfig, callback: C) -> Result<Self>
    where
        C: OptionsCallback<V>,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let fetch_tx = events_tx.clone();
        let scheduler = FetchScheduler::new(config.debounce, callback, move |resolution| {
            // The receiver only goes away with the widget.
            let _ = fetch_tx.send(WidgetEvent::FetchResolved(resolution));
        })?;
        let blur_timer = DelayedTask::new(config.blur_grace)?;

        tracing::debug!(
            target: targets::WIDGET,
            debounce_ms = config.debounce.as_millis() as u64,
            outside_click_detection = config.outside_click_detection,
            "typeahead created"
        );

        Ok(Self {
            state: TypeaheadState::new(&config),
            config,
            scheduler,
            blur_timer,
            blur_generation: 0,
            events_tx,
            events_rx,
            root: None,
            outside_clicks: None,
            text_changed: Signal::new(),
            fetch_failed: Signal::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The interaction state.
    pub fn state(&self) -> &TypeaheadState<V> {
        &self.state
    }

    /// The current input text.
    pub fn text(&self) -> &str {
        self.state.text()
    }

    /// The current option list.
    pub fn options(&self) -> &[TypeaheadItem<V>] {
        self.state.options()
    }

    /// The highlighted option index.
    pub fn selection_index(&self) -> SelectionIndex {
        self.state.selection_index()
    }

    /// The last committed option.
    pub fn selected_option(&self) -> Option<&TypeaheadItem<V>> {
        self.state.selected_option()
    }

    /// Whether the option panel is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether a lookup is waiting for the debounce window to close.
    pub fn is_fetch_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Number of lookups issued so far.
    pub fn fetches_issued(&self) -> u64 {
        self.scheduler.issued()
    }

    /// Whether an outside-click source is connected.
    ///
    /// Turns false once the host drops the pointer signal it mounted with.
    pub fn is_mounted(&self) -> bool {
        self.outside_clicks
            .as_ref()
            .is_some_and(ConnectionGuard::is_connected)
    }

    /// Signal emitted when an option is committed.
    pub fn option_chosen(&self) -> &Signal<TypeaheadItem<V>> {
        &self.state.option_chosen
    }

    /// Signal emitted when the panel opens or closes.
    pub fn open_changed(&self) -> &Signal<bool> {
        &self.state.open_changed
    }

    // =========================================================================
    // Input events
    // =========================================================================

    /// Handle a change of the input text.
    ///
    /// Records the text, forwards it on `text_changed` and restarts the
    /// lookup debounce. The open state is not touched.
    #[tracing::instrument(level = "trace", target = "typeahead::widget", skip(self, text))]
    pub fn on_text_changed(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.state.set_text(text.clone());
        self.text_changed.emit(text.clone());
        self.scheduler.schedule(text);
    }

    /// Handle the input gaining focus. Cancels a pending blur close.
    pub fn on_focus(&mut self) {
        if self.blur_timer.cancel() {
            tracing::trace!(target: targets::WIDGET, "blur close cancelled by focus");
        }
        // Invalidate a grace expiry that fired but is still queued.
        self.blur_generation += 1;
        self.state.open();
    }

    /// Handle the input losing focus.
    ///
    /// With outside-click detection disabled, the panel closes once the blur
    /// grace delay elapses, leaving time for a click on an option to land.
    /// With detection enabled, outside clicks close the panel instead and
    /// blur is ignored.
    pub fn on_blur(&mut self) {
        if self.config.outside_click_detection {
            tracing::trace!(target: targets::WIDGET, "blur ignored, outside-click detection active");
            return;
        }

        self.blur_generation += 1;
        let generation = self.blur_generation;
        let tx = self.events_tx.clone();
        self.blur_timer.schedule(move || {
            let _ = tx.send(WidgetEvent::BlurElapsed { generation });
        });
    }

    /// Handle a pointer press at `point`, in the coordinates of the mounted
    /// root region.
    ///
    /// Closes the panel if the press is outside the root region. Does
    /// nothing when outside-click detection is disabled or nothing is
    /// mounted. Returns `true` if the panel was closed.
    pub fn on_outside_click(&mut self, point: Point) -> bool {
        if !self.config.outside_click_detection {
            return false;
        }
        match self.root.as_deref() {
            Some(root) => self.state.on_outside_click(point, root),
            None => false,
        }
    }

    /// Handle a key press. See [`TypeaheadState::handle_key_press`].
    pub fn on_key_down(&mut self, key: Key) -> Result<bool> {
        self.state.handle_key_press(key)
    }

    /// Move the cursor down.
    pub fn move_selection_down(&mut self) -> SelectionIndex {
        self.state.move_selection_down()
    }

    /// Move the cursor up.
    pub fn move_selection_up(&mut self) -> SelectionIndex {
        self.state.move_selection_up()
    }

    /// Commit the highlighted option, if any.
    pub fn commit_selection(&mut self) -> Result<Option<CommitOutcome>> {
        self.state.commit_selection()
    }

    /// Close the panel.
    pub fn on_escape(&mut self) {
        self.state.on_escape();
    }

    /// Commit the option at `index` after a click on its row.
    pub fn on_option_activated(&mut self, index: usize) -> Result<CommitOutcome> {
        self.state.on_option_activated(index)
    }

    // =========================================================================
    // Mount lifecycle
    // =========================================================================

    /// Attach the widget to its root region and a global pointer source.
    ///
    /// Presses reported by `pointer_presses` are queued and handled as
    /// outside clicks. Mounting again replaces the previous root and source.
    pub fn mount<R>(&mut self, root: R, pointer_presses: &Signal<Point>)
    where
        R: RootRegion + Send + Sync + 'static,
    {
        let tx = self.events_tx.clone();
        let guard = pointer_presses.connect_scoped(move |point: &Point| {
            let _ = tx.send(WidgetEvent::PointerPressed(*point));
        });

        self.root = Some(Box::new(root));
        if self.outside_clicks.replace(guard).is_some() {
            tracing::debug!(target: targets::WIDGET, "typeahead remounted");
        } else {
            tracing::debug!(target: targets::WIDGET, "typeahead mounted");
        }
    }

    /// Detach from the pointer source and cancel pending timers.
    pub fn unmount(&mut self) {
        self.outside_clicks = None;
        self.root = None;
        self.scheduler.cancel();
        self.blur_timer.cancel();
        self.blur_generation += 1;
        tracing::debug!(target: targets::WIDGET, "typeahead unmounted");
    }

    // =========================================================================
    // Event queue
    // =========================================================================

    /// Apply every queued event without waiting.
    ///
    /// Returns the number of events applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next queued event and apply it.
    ///
    /// Returns `None` only if the queue is closed, which cannot happen while
    /// the widget is alive.
    pub async fn process_next(&mut self) -> Option<EventOutcome> {
        let event = self.events_rx.recv().await?;
        Some(self.apply_event(event))
    }

    fn apply_event(&mut self, event: WidgetEvent<V>) -> EventOutcome {
        match event {
            WidgetEvent::FetchResolved(resolution) => self.apply_resolution(resolution),
            WidgetEvent::BlurElapsed { generation } => {
                let closed = generation == self.blur_generation && self.state.close();
                tracing::trace!(target: targets::WIDGET, generation, closed, "blur grace elapsed");
                EventOutcome::BlurElapsed { closed }
            }
            WidgetEvent::PointerPressed(point) => EventOutcome::PointerPressed {
                closed: self.on_outside_click(point),
            },
        }
    }

    fn apply_resolution(&mut self, resolution: FetchResolution<V>) -> EventOutcome {
        let FetchResolution {
            sequence,
            search_value,
            result,
        } = resolution;

        match result {
            Ok(options) => match self.state.apply_sequenced_fetch(sequence, options, &search_value) {
                FetchOutcome::Applied { matched } => EventOutcome::FetchApplied { sequence, matched },
                FetchOutcome::Stale => EventOutcome::FetchDiscarded { sequence },
            },
            Err(err) => {
                tracing::warn!(
                    target: targets::FETCH,
                    sequence,
                    search_value = %search_value,
                    error = %err,
                    "keeping options after failed lookup"
                );
                self.fetch_failed.emit(err);
                EventOutcome::FetchFailed { sequence }
            }
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Hand the current state to the renderers.
    ///
    /// The input is always rendered. The option list is rendered only while
    /// the panel is open and has options. Returns `true` if it was rendered.
    pub fn render(
        &self,
        input: &mut dyn InputRenderer,
        options: &mut dyn OptionListRenderer<V>,
    ) -> bool {
        input.render_input(&InputView {
            text: self.state.text(),
            is_open: self.state.is_open(),
            has_selection: self.state.highlighted_option().is_some(),
        });

        if !self.state.should_render_panel() {
            return false;
        }
        options.render_options(&OptionListView {
            options: self.state.options(),
            selection_index: self.state.selection_index(),
            style: &self.config.style,
        });
        true
    }
}

impl<V> std::fmt::Debug for Typeahead<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeahead")
            .field("config", &self.config)
            .field("scheduler", &self.scheduler)
            .field("mounted", &self.outside_clicks.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::render::TextRenderer;

    fn ab_lookup(_search: String) -> impl std::future::Future<Output = crate::FetchResult<u32>> {
        async {
            Ok(vec![
                TypeaheadItem::new("Abacus", 1),
                TypeaheadItem::new("Abroad", 2),
            ])
        }
    }

    #[test]
    fn test_requires_runtime() {
        let err = Typeahead::<u32>::new(TypeaheadConfig::default(), ab_lookup).unwrap_err();
        assert_eq!(err, typeahead_core::CoreError::NoRuntime.into());
    }

    #[tokio::test(start_paused = true)]
    async fn test_text_change_feeds_options() {
        let mut widget = Typeahead::<u32>::new(TypeaheadConfig::default(), ab_lookup).unwrap();
        widget.on_focus();
        widget.on_text_changed("ab");
        assert!(widget.is_fetch_pending());
        assert_eq!(widget.process_pending(), 0);

        let outcome = widget.process_next().await;
        assert_eq!(
            outcome,
            Some(EventOutcome::FetchApplied {
                sequence: 1,
                matched: None
            })
        );
        assert_eq!(widget.options().len(), 2);
        assert!(widget.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_hides_empty_or_closed_panel() {
        let mut widget = Typeahead::<u32>::new(
            TypeaheadConfig::default().with_debounce(Duration::from_millis(5)),
            ab_lookup,
        )
        .unwrap();
        let mut input = TextRenderer::new();
        let mut list = TextRenderer::new();

        widget.on_focus();
        assert!(!widget.render(&mut input, &mut list));

        widget.on_text_changed("ab");
        widget.process_next().await;
        widget.move_selection_down();
        assert!(widget.render(&mut input, &mut list));
        assert_eq!(list.take(), "> Abacus\n  Abroad\n");

        widget.on_escape();
        assert!(!widget.render(&mut input, &mut list));
        assert!(list.output().is_empty());
        assert_eq!(input.take(), "[]\n[ab]\n[ab]\n");
    }
}
