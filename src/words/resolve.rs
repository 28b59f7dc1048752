// Overlap resolution across categories.
//
// Each word is kept in exactly one category: the one where it occurs most
// often. When two categories tie at the maximum, the one that comes first in
// the CategorySet wins. Two passes:
//
//   1. an immutable snapshot of word -> max count over every category
//   2. a filter per category against that snapshot, plus a set of words
//      already claimed by earlier categories (scoped to this call)
//
// Categories that lose every word stay in the output with an empty WordCount.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::category::{CategorySet, ResolvedSet};
use super::count::WordCount;

/// Per-word maximum count across all categories.
pub fn global_max(categories: &CategorySet) -> HashMap<&str, u64> {
    let mut max: HashMap<&str, u64> = HashMap::new();
    for (_, counts) in categories.iter() {
        for (word, count) in counts.iter() {
            let slot = max.entry(word).or_insert(0);
            *slot = (*slot).max(count);
        }
    }
    max
}

/// Remove cross-category overlaps, assigning each word to its
/// highest-frequency category (earliest category on ties).
pub fn resolve(categories: &CategorySet) -> ResolvedSet {
    let max = global_max(categories);
    let mut claimed: HashSet<&str> = HashSet::with_capacity(max.len());
    let mut resolved = CategorySet::new();

    for (id, counts) in categories.iter() {
        let mut kept = WordCount::new();
        for (word, count) in counts.iter() {
            if max.get(word) == Some(&count) && claimed.insert(word) {
                kept.add(word, count);
            }
        }

        debug!(
            category = %id,
            before = counts.len(),
            after = kept.len(),
            "Resolved category overlaps"
        );

        resolved.insert(id.clone(), kept);
    }

    ResolvedSet::new(resolved)
}
