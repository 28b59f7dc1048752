// Result writer trait: where resolved per-category tables end up.

use std::path::PathBuf;

use anyhow::Result;

use crate::words::category::CategoryId;
use crate::words::count::WordCount;

/// Persists one category's top words.
pub trait ResultWriter: Send + Sync {
    /// Write the `limit` most frequent entries of `counts` for `category`.
    /// Fewer entries than `limit`, or none at all, is not an error. Returns
    /// the location written to.
    fn write(&self, category: &CategoryId, counts: &WordCount, limit: usize) -> Result<PathBuf>;
}
