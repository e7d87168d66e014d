//! Presentation capabilities.
//!
//! The widget does not draw. After each batch of events the host calls
//! [`Typeahead::render`](crate::Typeahead::render), which hands read-only
//! views of the current state to two host-supplied renderers:
//!
//! - an [`InputRenderer`] for the text field (always rendered), and
//! - an [`OptionListRenderer`] for the option panel (rendered only while the
//!   panel is open and the option list is non-empty).
//!
//! [`TextRenderer`] is a plain-text implementation of both, used by the demo
//! and handy in tests.

use std::fmt::Write as _;

use crate::config::OptionListStyle;
use crate::item::TypeaheadItem;
use crate::selection::SelectionIndex;

/// State handed to the text field renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputView<'a> {
    /// The current text of the field.
    pub text: &'a str,
    /// Whether the option panel is open.
    pub is_open: bool,
    /// Whether an option is highlighted.
    pub has_selection: bool,
}

/// Renders the text field.
pub trait InputRenderer {
    /// Draw the text field.
    fn render_input(&mut self, view: &InputView<'_>);
}

/// State handed to the option list renderer.
#[derive(Debug)]
pub struct OptionListView<'a, V> {
    /// The options, in relevance order.
    pub options: &'a [TypeaheadItem<V>],
    /// The highlighted option, if any.
    pub selection_index: SelectionIndex,
    /// Colors for the panel and highlighted row.
    pub style: &'a OptionListStyle,
}

impl<'a, V> OptionListView<'a, V> {
    /// Whether the row at `index` is highlighted.
    pub fn is_active(&self, index: usize) -> bool {
        self.selection_index == Some(index)
    }

    /// Iterate rows as `(index, option, is_active)`.
    ///
    /// Report clicks on a row back with its index through
    /// [`Typeahead::on_option_activated`](crate::Typeahead::on_option_activated).
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a TypeaheadItem<V>, bool)> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(move |(index, option)| (index, option, self.is_active(index)))
    }
}

/// Renders the option panel.
pub trait OptionListRenderer<V> {
    /// Draw the option panel.
    fn render_options(&mut self, view: &OptionListView<'_, V>);
}

/// Renders the widget as plain text, one line per row.
///
/// The input line is prefixed with `[` and `]`; the highlighted row is
/// prefixed with `> ` and the others with two spaces.
#[derive(Debug, Default, Clone)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The text produced so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take the produced text, leaving the renderer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl InputRenderer for TextRenderer {
    fn render_input(&mut self, view: &InputView<'_>) {
        let _ = writeln!(self.output, "[{}]", view.text);
    }
}

impl<V> OptionListRenderer<V> for TextRenderer {
    fn render_options(&mut self, view: &OptionListView<'_, V>) {
        for (_, option, active) in view.rows() {
            let marker = if active { "> " } else { "  " };
            let _ = writeln!(self.output, "{marker}{}", option.text());
        }
    }
}
