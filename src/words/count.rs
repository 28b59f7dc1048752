// WordCount: an insertion-ordered bag of words.
//
// Every stored word has a count of at least 1. Iteration yields words in the
// order they were first added, which is the tie-break order used everywhere
// downstream (overlap resolution and top-N selection).

use indexmap::IndexMap;

/// Frequency table of normalized words within some scope (one article, one
/// category).
///
/// Equality compares contents only, not order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: IndexMap<String, u64>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` occurrences of `word`. A new word is appended at the end of the
    /// iteration order; an existing one keeps its position. Adding zero is a
    /// no-op so that no zero counts are ever stored.
    pub fn add(&mut self, word: impl Into<String>, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(word.into()).or_insert(0) += n;
    }

    /// Multiset sum: add every entry of `other` into `self`, in `other`'s order.
    pub fn merge(&mut self, other: &WordCount) {
        for (word, count) in other.iter() {
            self.add(word, count);
        }
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate `(word, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `limit` highest-count entries, descending by count. Entries with
    /// equal counts keep their first-seen order (the sort is stable).
    pub fn most_common(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}

impl FromIterator<String> for WordCount {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut wc = WordCount::new();
        wc.extend(iter);
        wc
    }
}

impl<'a> FromIterator<&'a str> for WordCount {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_owned).collect()
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for WordCount {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut wc = WordCount::new();
        for (word, count) in iter {
            wc.add(word, count);
        }
        wc
    }
}

impl<K: Into<String>, const N: usize> From<[(K, u64); N]> for WordCount {
    fn from(pairs: [(K, u64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Extend<String> for WordCount {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for word in iter {
            self.add(word, 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_of_words_counts_and_order() {
        let wc: WordCount = ["b", "a", "b", "c", "a", "b"].into_iter().collect();
        assert_eq!(wc.get("a"), Some(2));
        assert_eq!(wc.get("b"), Some(3));
        assert_eq!(wc.get("c"), Some(1));
        let order: Vec<&str> = wc.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
        assert_eq!(wc.total(), 6);
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut wc = WordCount::new();
        wc.add("ghost", 0);
        assert!(wc.is_empty());
        assert!(!wc.contains("ghost"));
    }

    #[test]
    fn test_merge_sums_and_appends_new_words() {
        let mut a = WordCount::from([("x", 1), ("y", 2)]);
        let b = WordCount::from([("z", 5), ("x", 3)]);
        a.merge(&b);
        assert_eq!(a.get("x"), Some(4));
        assert_eq!(a.get("z"), Some(5));
        let order: Vec<&str> = a.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_most_common_descending() {
        let wc = WordCount::from([("foo", 10), ("bar", 20), ("baz", 15)]);
        assert_eq!(
            wc.most_common(10),
            vec![("bar", 20), ("baz", 15), ("foo", 10)]
        );
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let wc = WordCount::from([("late", 1), ("first", 7), ("second", 7), ("third", 7)]);
        assert_eq!(wc.most_common(2), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_most_common_limit_larger_than_len() {
        let wc = WordCount::from([("only", 1)]);
        assert_eq!(wc.most_common(100).len(), 1);
        assert!(WordCount::new().most_common(5).is_empty());
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = WordCount::from([("a", 1), ("b", 2)]);
        let b = WordCount::from([("b", 2), ("a", 1)]);
        assert_eq!(a, b);
    }
}
