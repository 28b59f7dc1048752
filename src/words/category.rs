// Category identifiers and the per-run category → WordCount mapping.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use url::Url;

use super::count::WordCount;

/// Short identifier for a category, derived from its URL's last path segment
/// (`https://lenta.ru/rubrics/world/` → `world`). Also used as the output
/// file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive an ID from an absolute category URL. Trailing slashes, query
    /// strings and fragments are ignored. Returns `None` when the URL has no
    /// non-empty path segment.
    pub fn from_url(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        let segment = parsed
            .path_segments()?
            .filter(|s| !s.is_empty())
            .last()?
            .to_string();
        Some(Self(segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CategoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One WordCount per crawled category, in discovery order.
///
/// Equality compares contents only, not order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    categories: IndexMap<CategoryId, WordCount>,
}

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category's counts. A new category goes to the end of the
    /// iteration order; re-inserting an existing ID replaces its counts but
    /// keeps its original position.
    pub fn insert(&mut self, id: CategoryId, counts: WordCount) -> Option<WordCount> {
        self.categories.insert(id, counts)
    }

    pub fn get(&self, id: &str) -> Option<&WordCount> {
        self.categories.get(id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate categories in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &WordCount)> {
        self.categories.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.categories.keys()
    }
}

impl FromIterator<(CategoryId, WordCount)> for CategorySet {
    fn from_iter<I: IntoIterator<Item = (CategoryId, WordCount)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<CategoryId>, const N: usize> From<[(K, WordCount); N]> for CategorySet {
    fn from(entries: [(K, WordCount); N]) -> Self {
        entries
            .into_iter()
            .map(|(id, counts)| (id.into(), counts))
            .collect()
    }
}

/// A CategorySet in which no word appears in more than one category.
///
/// Only produced by [`crate::words::resolve::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSet(CategorySet);

impl ResolvedSet {
    pub(crate) fn new(set: CategorySet) -> Self {
        Self(set)
    }

    pub fn get(&self, id: &str) -> Option<&WordCount> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, &WordCount)> {
        self.0.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CategoryId> {
        self.0.ids()
    }
}

impl PartialEq<CategorySet> for ResolvedSet {
    fn eq(&self, other: &CategorySet) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_id_from_url() {
        let id = CategoryId::from_url("https://lenta.ru/rubrics/bar/world/").unwrap();
        assert_eq!(id.as_str(), "world");

        let id = CategoryId::from_url("https://lenta.ru/rubrics/foo/media").unwrap();
        assert_eq!(id.as_str(), "media");
    }

    #[test]
    fn test_category_id_ignores_query_and_fragment() {
        let id = CategoryId::from_url("https://lenta.ru/rubrics/sport/?page=2#top").unwrap();
        assert_eq!(id.as_str(), "sport");
    }

    #[test]
    fn test_category_id_from_root_is_none() {
        assert!(CategoryId::from_url("https://lenta.ru/").is_none());
        assert!(CategoryId::from_url("not a url").is_none());
    }

    #[test]
    fn test_category_set_preserves_insertion_order() {
        let mut set = CategorySet::new();
        set.insert("world".into(), WordCount::new());
        set.insert("media".into(), WordCount::new());
        set.insert("economics".into(), WordCount::new());
        set.insert("world".into(), WordCount::from([("x", 1)]));

        let ids: Vec<&str> = set.ids().map(CategoryId::as_str).collect();
        assert_eq!(ids, vec!["world", "media", "economics"]);
        assert_eq!(set.get("world").unwrap().get("x"), Some(1));
    }
}
