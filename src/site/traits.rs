// Article fetcher trait: the seam between crawling and counting.
//
// The pipeline only needs two things from a site: the ordered list of
// categories, and the article texts of one category. SiteFetcher does this
// over HTTP; tests substitute an in-memory implementation.

use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;

use crate::words::category::CategoryId;

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// Categories found on the site root, ID -> category URL, in first-seen
    /// order. Duplicate IDs keep their first URL. No categories is an empty
    /// map, not an error.
    async fn discover_categories(&self) -> Result<IndexMap<CategoryId, String>>;

    /// Article texts of one category, at most the configured article count.
    /// Articles that fail to fetch are skipped.
    async fn fetch_article_texts(&self, category_url: &str) -> Result<Vec<String>>;
}
