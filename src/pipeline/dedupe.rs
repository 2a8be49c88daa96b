//! First-wins deduplication.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::ColorRecord;

/// Keep the first item for every distinct key, preserving order.
pub fn dedupe_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Drop colours whose RGB triple was already seen, whatever their name.
pub fn dedupe(colors: Vec<ColorRecord>) -> Vec<ColorRecord> {
    dedupe_by_key(colors, ColorRecord::rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_by_key_first_wins() {
        let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
        let firsts = dedupe_by_key(words, |w| w.chars().next());
        assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_dedupe_ignores_names() {
        let colors = vec![
            ColorRecord::new("Zeta", 1, 2, 3),
            ColorRecord::new("Alpha", 1, 2, 3),
        ];
        assert_eq!(dedupe(colors), vec![ColorRecord::new("Zeta", 1, 2, 3)]);
    }

    #[test]
    fn test_dedupe_keeps_same_name_different_rgb() {
        let colors = vec![
            ColorRecord::new("Red", 255, 0, 0),
            ColorRecord::new("Red", 254, 0, 0),
        ];
        assert_eq!(dedupe(colors).len(), 2);
    }

    #[test]
    fn test_dedupe_preserves_first_occurrence_order() {
        let colors = vec![
            ColorRecord::new("c", 3, 3, 3),
            ColorRecord::new("a", 1, 1, 1),
            ColorRecord::new("c2", 3, 3, 3),
            ColorRecord::new("b", 2, 2, 2),
            ColorRecord::new("a2", 1, 1, 1),
        ];
        let names: Vec<String> = dedupe(colors).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
