//! The interaction state machine.
//!
//! [`TypeaheadState`] owns the option list, the selection cursor, the last
//! committed option, the input text and the open state. Every handler runs
//! synchronously and needs no runtime; timers and lookups live in
//! [`Typeahead`](crate::Typeahead), which feeds their results in here.
//!
//! # Commit rules
//!
//! - An explicit commit (Enter, pointer activation) writes the option's label
//!   into the text and always closes the panel. The `option_chosen` signal
//!   fires only if the option's value differs from the last committed one.
//! - Auto-match runs after each applied lookup. It applies the same value
//!   dedupe but never closes the panel and never rewrites the text.

use typeahead_core::logging::targets;
use typeahead_core::{PerfSpan, Point, Property, Signal};

use crate::config::TypeaheadConfig;
use crate::error::{Result, TypeaheadError};
use crate::item::TypeaheadItem;
use crate::key::Key;
use crate::matching::find_exact_match;
use crate::region::RootRegion;
use crate::selection::{SelectionIndex, clamp_index, next_index, previous_index};

/// Result of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The option differs from the previous choice; `option_chosen` fired.
    Chosen,
    /// The option has the same value as the previous choice; nothing fired.
    Unchanged,
}

/// Result of applying a sequenced lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The list was replaced. `matched` is the auto-matched index, if any.
    Applied { matched: Option<usize> },
    /// A newer lookup was already applied; the list was left alone.
    Stale,
}

/// Interaction state of a typeahead.
#[derive(Debug)]
pub struct TypeaheadState<V> {
    options: Vec<TypeaheadItem<V>>,
    selection_index: SelectionIndex,
    selected_option: Option<TypeaheadItem<V>>,
    text: String,
    open: Property<bool>,
    last_applied_sequence: Option<u64>,
    auto_match: bool,
    discard_stale_fetches: bool,

    /// Emitted with the option when a commit picks a new value.
    pub option_chosen: Signal<TypeaheadItem<V>>,
    /// Emitted with the new open state whenever it changes.
    pub open_changed: Signal<bool>,
}

impl<V: Clone + PartialEq + Send + 'static> TypeaheadState<V> {
    /// Create a closed state with no options.
    pub fn new(config: &TypeaheadConfig) -> Self {
        Self {
            options: Vec::new(),
            selection_index: None,
            selected_option: None,
            text: String::new(),
            open: Property::new(false),
            last_applied_sequence: None,
            auto_match: config.auto_match,
            discard_stale_fetches: config.discard_stale_fetches,
            option_chosen: Signal::new(),
            open_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current option list.
    pub fn options(&self) -> &[TypeaheadItem<V>] {
        &self.options
    }

    /// The highlighted option index.
    pub fn selection_index(&self) -> SelectionIndex {
        self.selection_index
    }

    /// The highlighted option.
    pub fn highlighted_option(&self) -> Option<&TypeaheadItem<V>> {
        self.selection_index.and_then(|index| self.options.get(index))
    }

    /// The last committed option.
    pub fn selected_option(&self) -> Option<&TypeaheadItem<V>> {
        self.selected_option.as_ref()
    }

    /// The current input text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the panel is open. An open panel with no options draws nothing.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Whether the option panel should be drawn.
    pub fn should_render_panel(&self) -> bool {
        self.is_open() && !self.options.is_empty()
    }

    /// Highest lookup sequence applied so far.
    pub fn last_applied_sequence(&self) -> Option<u64> {
        self.last_applied_sequence
    }

    // =========================================================================
    // Text and visibility
    // =========================================================================

    /// Record the raw input text. The open state is not touched.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Set the open state, emitting `open_changed` on a transition.
    ///
    /// Returns `true` if the state changed.
    pub fn set_open(&self, open: bool) -> bool {
        let changed = self.open.set_notify(open, &self.open_changed);
        if changed {
            tracing::debug!(target: targets::STATE, open, "open state changed");
        }
        changed
    }

    /// Open the panel.
    pub fn open(&self) -> bool {
        self.set_open(true)
    }

    /// Close the panel.
    pub fn close(&self) -> bool {
        self.set_open(false)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Replace the option list with a lookup result for `source_text`.
    ///
    /// The cursor is clamped into the new list and auto-match runs against
    /// `source_text`. Returns the auto-matched index, if any. The open state
    /// is unchanged.
    pub fn apply_fetch(
        &mut self,
        options: Vec<TypeaheadItem<V>>,
        source_text: &str,
    ) -> Option<usize> {
        let _perf = PerfSpan::new("apply_fetch");

        self.options = options;
        let previous = self.selection_index;
        self.selection_index = clamp_index(previous, self.options.len());
        tracing::debug!(
            target: targets::STATE,
            count = self.options.len(),
            ?previous,
            selection = ?self.selection_index,
            "options replaced"
        );

        if !self.auto_match {
            return None;
        }
        let matched = find_exact_match(&self.options, source_text)?;
        let option = self.options[matched].clone();
        tracing::debug!(target: targets::STATE, index = matched, text = option.text(), "auto-matched");
        self.record_choice(option);
        Some(matched)
    }

    /// Apply a lookup result tagged with its issue `sequence`.
    ///
    /// With stale discarding enabled, a result older than the newest applied
    /// one is dropped. Otherwise every result is applied in arrival order.
    pub fn apply_sequenced_fetch(
        &mut self,
        sequence: u64,
        options: Vec<TypeaheadItem<V>>,
        source_text: &str,
    ) -> FetchOutcome {
        if let Some(last) = self.last_applied_sequence
            && sequence < last
        {
            if self.discard_stale_fetches {
                tracing::debug!(target: targets::STATE, sequence, last, "discarding stale lookup");
                return FetchOutcome::Stale;
            }
            tracing::debug!(target: targets::STATE, sequence, last, "applying out-of-order lookup");
        }

        let newest = self
            .last_applied_sequence
            .map_or(sequence, |last| last.max(sequence));
        self.last_applied_sequence = Some(newest);
        let matched = self.apply_fetch(options, source_text);
        FetchOutcome::Applied { matched }
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    /// Move the cursor down, wrapping through "no selection".
    #[tracing::instrument(level = "trace", target = "typeahead::state", skip(self), ret)]
    pub fn move_selection_down(&mut self) -> SelectionIndex {
        self.selection_index = next_index(self.selection_index, self.options.len());
        self.selection_index
    }

    /// Move the cursor up, wrapping through "no selection".
    #[tracing::instrument(level = "trace", target = "typeahead::state", skip(self), ret)]
    pub fn move_selection_up(&mut self) -> SelectionIndex {
        self.selection_index = previous_index(self.selection_index, self.options.len());
        self.selection_index
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Commit the option at `index`.
    ///
    /// Writes the option's label into the text and closes the panel. Fails
    /// without changing anything if `index` is out of range.
    pub fn commit(&mut self, index: usize) -> Result<CommitOutcome> {
        let option = self
            .options
            .get(index)
            .cloned()
            .ok_or(TypeaheadError::InvalidSelectionIndex {
                index,
                len: self.options.len(),
            })?;

        self.text = option.text().to_owned();
        let outcome = self.record_choice(option);
        self.close();
        Ok(outcome)
    }

    /// Commit the highlighted option, if any.
    pub fn commit_selection(&mut self) -> Result<Option<CommitOutcome>> {
        match self.selection_index {
            Some(index) => self.commit(index).map(Some),
            None => Ok(None),
        }
    }

    /// Commit an option the user clicked.
    pub fn on_option_activated(&mut self, index: usize) -> Result<CommitOutcome> {
        tracing::debug!(target: targets::STATE, index, "option activated");
        self.commit(index)
    }

    fn record_choice(&mut self, option: TypeaheadItem<V>) -> CommitOutcome {
        if self
            .selected_option
            .as_ref()
            .is_some_and(|selected| selected.same_value(&option))
        {
            tracing::trace!(target: targets::STATE, text = option.text(), "choice unchanged");
            // Same choice, but keep the latest label.
            self.selected_option = Some(option);
            return CommitOutcome::Unchanged;
        }

        tracing::debug!(target: targets::STATE, text = option.text(), "option chosen");
        self.selected_option = Some(option.clone());
        self.option_chosen.emit(option);
        CommitOutcome::Chosen
    }

    // =========================================================================
    // Keyboard and pointer
    // =========================================================================

    /// Close the panel, keeping the cursor where it is.
    pub fn on_escape(&mut self) {
        self.close();
    }

    /// Dispatch a key press.
    ///
    /// Returns `true` when the host should suppress the key's default action
    /// (arrow keys, and Enter when it committed an option). After the key is
    /// handled, any key without a dedicated handler reopens a closed panel.
    pub fn handle_key_press(&mut self, key: Key) -> Result<bool> {
        tracing::trace!(target: targets::STATE, ?key, "key pressed");

        let consumed = match key {
            Key::ArrowDown => {
                self.move_selection_down();
                true
            }
            Key::ArrowUp => {
                self.move_selection_up();
                true
            }
            Key::Enter => self.commit_selection()?.is_some(),
            Key::Escape => {
                self.on_escape();
                false
            }
            Key::AltLeft | Key::Character(_) | Key::Other => false,
        };

        if !key.is_reserved() && !self.is_open() {
            self.open();
        }
        Ok(consumed)
    }

    /// Handle a pointer press. Closes the panel when `point` is outside `root`.
    ///
    /// Returns `true` if the panel was closed.
    pub fn on_outside_click(&mut self, point: Point, root: &dyn RootRegion) -> bool {
        if !self.is_open() || root.contains_point(point) {
            return false;
        }
        tracing::debug!(target: targets::STATE, x = point.x, y = point.y, "pointer pressed outside");
        self.close()
    }
}
