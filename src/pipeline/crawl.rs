// Crawl pipeline: discover categories, count words per category, resolve
// overlaps, write one table per category.
//
// Categories are fetched and aggregated through an order-preserving bounded
// stream, so the CategorySet always comes out in discovery order no matter
// how many run at once. Resolution starts only once every category is done.

use std::path::PathBuf;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::output::traits::ResultWriter;
use crate::site::traits::ArticleFetcher;
use crate::text::traits::Normalizer;
use crate::words::aggregate::aggregate;
use crate::words::category::{CategoryId, CategorySet};
use crate::words::count::WordCount;
use crate::words::resolve::resolve;

/// Everything gathered before overlap resolution.
#[derive(Debug, Default)]
pub struct Collected {
    /// Per-category counts, in discovery order.
    pub set: CategorySet,
    /// Number of articles that contributed text, per category.
    pub articles: IndexMap<CategoryId, usize>,
}

/// Per-category outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: CategoryId,
    pub articles: usize,
    /// Distinct words before overlap resolution.
    pub words_before: usize,
    /// Distinct words kept after resolution.
    pub words_after: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub categories: Vec<CategoryReport>,
}

/// Fetch and aggregate one category. A failed listing fetch gives an empty
/// WordCount rather than an error.
pub async fn count_category(
    fetcher: &dyn ArticleFetcher,
    normalizer: &dyn Normalizer,
    category: &CategoryId,
    url: &str,
) -> (usize, WordCount) {
    let texts = match fetcher.fetch_article_texts(url).await {
        Ok(texts) => texts,
        Err(e) => {
            warn!(category = %category, error = %e, "Failed to fetch category, counting it as empty");
            Vec::new()
        }
    };
    let counts = aggregate(&texts, normalizer);
    (texts.len(), counts)
}

/// Count words for every category, `concurrency` at a time.
pub async fn collect_categories(
    fetcher: &dyn ArticleFetcher,
    normalizer: &dyn Normalizer,
    categories: &IndexMap<CategoryId, String>,
    concurrency: usize,
) -> Result<Collected> {
    let pb = ProgressBar::new(categories.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("  Categories [{bar:30}] {pos}/{len} ({eta})")?);
    let progress = &pb;

    let results: Vec<(CategoryId, usize, WordCount)> =
        stream::iter(categories.iter().map(|(id, url)| async move {
            let (articles, counts) = count_category(fetcher, normalizer, id, url).await;
            progress.inc(1);
            (id.clone(), articles, counts)
        }))
        .buffered(concurrency.max(1))
        .collect()
        .await;
    pb.finish_and_clear();

    let mut collected = Collected::default();
    for (id, articles, counts) in results {
        info!(
            category = %id,
            articles,
            distinct_words = counts.len(),
            "Counted category"
        );
        collected.articles.insert(id.clone(), articles);
        collected.set.insert(id, counts);
    }

    Ok(collected)
}

/// Run the whole crawl and write one table per category.
///
/// Returns an empty summary when the site root lists no categories. Writer
/// failures abort the run.
pub async fn run(
    fetcher: &dyn ArticleFetcher,
    normalizer: &dyn Normalizer,
    writer: &dyn ResultWriter,
    count_words: usize,
    concurrency: usize,
) -> Result<RunSummary> {
    let categories = fetcher.discover_categories().await?;
    if categories.is_empty() {
        warn!("No categories found on the site root, nothing to do");
        return Ok(RunSummary::default());
    }

    info!(
        categories = categories.len(),
        concurrency = concurrency.max(1),
        "Counting words"
    );

    let collected = collect_categories(fetcher, normalizer, &categories, concurrency).await?;
    let resolved = resolve(&collected.set);

    let mut summary = RunSummary::default();
    for (id, counts) in resolved.iter() {
        let path = writer.write(id, counts, count_words)?;
        summary.categories.push(CategoryReport {
            category: id.clone(),
            articles: collected.articles.get(id.as_str()).copied().unwrap_or(0),
            words_before: collected.set.get(id.as_str()).map_or(0, WordCount::len),
            words_after: counts.len(),
            path,
        });
    }

    info!(
        categories = summary.categories.len(),
        "Crawl complete"
    );

    Ok(summary)
}
