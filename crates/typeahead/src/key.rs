//! Keys understood by the keydown dispatcher.

/// A key press delivered by the host's text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move the selection down.
    ArrowDown,
    /// Move the selection up.
    ArrowUp,
    /// Commit the highlighted option.
    Enter,
    /// Close the option panel.
    Escape,
    /// The left Alt modifier; ignored by the dispatcher.
    AltLeft,
    /// A printable character.
    Character(char),
    /// Any other key (Tab, Backspace, Home, ...).
    Other,
}

impl Key {
    /// Decode a DOM-style `code` string such as `"ArrowDown"` or `"KeyA"`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Enter" | "NumpadEnter" => Self::Enter,
            "Escape" => Self::Escape,
            "AltLeft" => Self::AltLeft,
            "Space" => Self::Character(' '),
            _ => code
                .strip_prefix("Key")
                .or_else(|| code.strip_prefix("Digit"))
                .and_then(single_char)
                .map(|c| Self::from(c.to_ascii_lowercase()))
                .unwrap_or(Self::Other),
        }
    }

    /// Decode a legacy numeric key code (`40` = down, `38` = up, `13` = enter,
    /// `27` = escape, `18` = alt).
    pub fn from_key_code(key_code: u32) -> Self {
        match key_code {
            40 => Self::ArrowDown,
            38 => Self::ArrowUp,
            13 => Self::Enter,
            27 => Self::Escape,
            18 => Self::AltLeft,
            32 => Self::Character(' '),
            48..=57 | 65..=90 => char::from_u32(key_code)
                .map(|c| Self::from(c.to_ascii_lowercase()))
                .unwrap_or(Self::Other),
            _ => Self::Other,
        }
    }

    /// Keys with a dedicated handler. All other keys reopen a closed panel.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            Self::ArrowDown | Self::ArrowUp | Self::Enter | Self::Escape | Self::AltLeft
        )
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Character(c)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
