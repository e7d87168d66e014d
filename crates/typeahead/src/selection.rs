//! Selection cursor movement.
//!
//! The cursor ranges over `None` plus every index of the option list. Moving
//! past either end lands on `None` before wrapping, so the user can arrow
//! through all options and back to "no selection" without committing:
//!
//! ```text
//! down: None -> 0 -> 1 -> ... -> len-1 -> None -> 0 ...
//! up:   None -> len-1 -> ... -> 0 -> None -> len-1 ...
//! ```
//!
//! An empty list has no indices, so `None` is the only reachable state.
//!
//! ```
//! use typeahead::selection::{next_index, previous_index};
//!
//! assert_eq!(next_index(None, 2), Some(0));
//! assert_eq!(next_index(Some(1), 2), None);
//! assert_eq!(previous_index(None, 2), Some(1));
//! assert_eq!(previous_index(Some(0), 2), None);
//! assert_eq!(next_index(None, 0), None);
//! ```

/// Cursor position within the option list; `None` means nothing is highlighted.
pub type SelectionIndex = Option<usize>;

/// The cursor position after moving down in a list of `len` options.
pub fn next_index(current: SelectionIndex, len: usize) -> SelectionIndex {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(0),
        Some(index) if index + 1 >= len => None,
        Some(index) => Some(index + 1),
    }
}

/// The cursor position after moving up in a list of `len` options.
pub fn previous_index(current: SelectionIndex, len: usize) -> SelectionIndex {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(len - 1),
        Some(0) => None,
        // An index past the end moves onto the last option.
        Some(index) => Some(index.min(len) - 1),
    }
}

/// Clamp a cursor into a list of `len` options.
///
/// Indices past the end move to the last option; an empty list clears the
/// cursor.
pub fn clamp_index(current: SelectionIndex, len: usize) -> SelectionIndex {
    match (current, len) {
        (_, 0) => None,
        (Some(index), len) => Some(index.min(len - 1)),
        (None, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_cycles_through_none() {
        for len in 0..6 {
            let mut cursor = None;
            let mut visited = Vec::new();
            for _ in 0..=len {
                cursor = next_index(cursor, len);
                visited.push(cursor);
            }
            // len + 1 moves return to the starting state.
            assert_eq!(cursor, None, "len {len}");

            let expected: Vec<_> = (0..len).map(Some).chain([None]).collect();
            assert_eq!(visited, expected, "len {len}");
        }
    }

    #[test]
    fn test_up_cycles_through_none() {
        for len in 0..6 {
            let mut cursor = None;
            for _ in 0..=len {
                cursor = previous_index(cursor, len);
            }
            assert_eq!(cursor, None, "len {len}");
        }
        assert_eq!(previous_index(None, 3), Some(2));
        assert_eq!(previous_index(Some(2), 3), Some(1));
    }

    #[test]
    fn test_up_then_down_is_identity_off_boundary() {
        let len = 5;
        for index in 1..len - 1 {
            let start = Some(index);
            assert_eq!(next_index(previous_index(start, len), len), start);
            assert_eq!(previous_index(next_index(start, len), len), start);
        }
    }

    #[test]
    fn test_empty_list_stays_none() {
        assert_eq!(next_index(None, 0), None);
        assert_eq!(previous_index(None, 0), None);
        assert_eq!(next_index(Some(3), 0), None);
        assert_eq!(previous_index(Some(3), 0), None);
    }

    #[test]
    fn test_out_of_range_cursor_never_escapes() {
        assert_eq!(next_index(Some(7), 3), None);
        assert_eq!(previous_index(Some(7), 3), Some(2));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_index(Some(4), 2), Some(1));
        assert_eq!(clamp_index(Some(1), 2), Some(1));
        assert_eq!(clamp_index(Some(4), 0), None);
        assert_eq!(clamp_index(None, 3), None);
    }
}
