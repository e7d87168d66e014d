//! Widget configuration.
//!
//! ```
//! use std::time::Duration;
//! use typeahead::TypeaheadConfig;
//!
//! let config = TypeaheadConfig::default()
//!     .with_debounce(Duration::from_millis(150))
//!     .with_auto_match(false);
//! assert!(config.outside_click_detection);
//! ```

use std::time::Duration;

use typeahead_core::Color;

/// Default quiet period before a lookup is issued.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Default delay between a blur and the panel closing.
pub const DEFAULT_BLUR_GRACE: Duration = Duration::from_millis(10);

/// Shortest accepted blur grace; a zero delay would close the panel before
/// a pending option click is delivered.
const MIN_BLUR_GRACE: Duration = Duration::from_millis(1);

/// Colors forwarded to the option list renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionListStyle {
    /// Panel background.
    pub background: Color,
    /// Panel border.
    pub border: Color,
    /// Row text.
    pub text: Color,
    /// Background of the highlighted row.
    pub active_background: Color,
    /// Text of the highlighted row.
    pub active_text: Color,
}

impl Default for OptionListStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            border: Color::from_rgb8(180, 180, 180),
            text: Color::BLACK,
            active_background: Color::from_rgba8(51, 153, 255, 200),
            active_text: Color::WHITE,
        }
    }
}

impl OptionListStyle {
    /// Set the panel background using builder pattern.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the panel border using builder pattern.
    pub fn with_border(mut self, color: Color) -> Self {
        self.border = color;
        self
    }

    /// Set the row text color using builder pattern.
    pub fn with_text(mut self, color: Color) -> Self {
        self.text = color;
        self
    }

    /// Set the highlighted row colors using builder pattern.
    pub fn with_active(mut self, background: Color, text: Color) -> Self {
        self.active_background = background;
        self.active_text = text;
        self
    }
}

/// Configuration for a [`Typeahead`](crate::Typeahead).
#[derive(Debug, Clone, PartialEq)]
pub struct TypeaheadConfig {
    /// Quiet period after the last text change before a lookup is issued.
    pub debounce: Duration,
    /// Delay between a blur and the panel closing (only used when
    /// outside-click detection is disabled).
    pub blur_grace: Duration,
    /// Close on pointer presses outside the root region instead of on blur.
    pub outside_click_detection: bool,
    /// Commit an option implicitly when the typed text equals its label.
    pub auto_match: bool,
    /// Drop lookup results that resolve after a newer lookup was applied.
    pub discard_stale_fetches: bool,
    /// Colors forwarded to the option list renderer.
    pub style: OptionListStyle,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            blur_grace: DEFAULT_BLUR_GRACE,
            outside_click_detection: true,
            auto_match: true,
            discard_stale_fetches: true,
            style: OptionListStyle::default(),
        }
    }
}

impl TypeaheadConfig {
    /// A configuration that closes the panel on blur rather than on
    /// outside clicks, for hosts without a global pointer stream.
    pub fn focus_driven() -> Self {
        Self {
            outside_click_detection: false,
            ..Default::default()
        }
    }

    /// Set the debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the blur grace delay. Values below one millisecond are raised to
    /// one millisecond.
    pub fn with_blur_grace(mut self, grace: Duration) -> Self {
        self.blur_grace = grace.max(MIN_BLUR_GRACE);
        self
    }

    /// Enable or disable outside-click detection.
    pub fn with_outside_click_detection(mut self, enabled: bool) -> Self {
        self.outside_click_detection = enabled;
        self
    }

    /// Enable or disable auto-match.
    pub fn with_auto_match(mut self, enabled: bool) -> Self {
        self.auto_match = enabled;
        self
    }

    /// Enable or disable discarding of out-of-order lookup results.
    pub fn with_discard_stale_fetches(mut self, enabled: bool) -> Self {
        self.discard_stale_fetches = enabled;
        self
    }

    /// Set the option list style.
    pub fn with_style(mut self, style: OptionListStyle) -> Self {
        self.style = style;
        self
    }
}
