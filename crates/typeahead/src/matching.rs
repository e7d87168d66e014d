//! Exact-label matching between typed text and fetched options.

use crate::item::TypeaheadItem;

/// Normalize text for label comparison: trim surrounding whitespace and
/// case-fold.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `label` and `raw_text` are equal after normalization.
pub fn labels_match(label: &str, raw_text: &str) -> bool {
    normalize(label) == normalize(raw_text)
}

/// Find the first option whose label equals `raw_text` after normalization.
///
/// Ties resolve to the earliest option in list order.
pub fn find_exact_match<V>(options: &[TypeaheadItem<V>], raw_text: &str) -> Option<usize> {
    options
        .iter()
        .position(|option| labels_match(option.text(), raw_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(labels: &[&str]) -> Vec<TypeaheadItem<usize>> {
        labels
            .iter()
            .enumerate()
            .map(|(value, text)| TypeaheadItem::new(*text, value))
            .collect()
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert!(labels_match(" foo ", "Foo"));
        assert!(labels_match("ÅSA", "åsa"));
        assert!(!labels_match("foo", "fo o"));
    }

    #[test]
    fn test_first_match_wins() {
        let options = items(&["Abacus", "abroad", " ABROAD "]);
        assert_eq!(find_exact_match(&options, "Abroad"), Some(1));
    }

    #[test]
    fn test_no_match_on_prefix() {
        let options = items(&["Abacus", "Abroad"]);
        assert_eq!(find_exact_match(&options, "ab"), None);
        assert_eq!(find_exact_match::<usize>(&[], "ab"), None);
    }
}
