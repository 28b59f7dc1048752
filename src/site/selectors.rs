// HTML extraction for the three page kinds the crawler reads.
//
// - site root: sidebar menu items, each linking to a `/rubrics/...` page
// - category page: a content block listing `/news/...` links
// - article page: paragraphs of the article body
//
// Every function here is pure and tolerant: missing markup gives an empty
// result, never an error. Links are resolved against the page they came from.

use std::collections::BTreeSet;

use anyhow::Result;
use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::words::category::CategoryId;

/// Sidebar menu entry on the site root.
pub const CSS_CATEGORY_ITEM: &str = ".b-sidebar-menu__list-item";
/// Block holding the article links on a category page.
pub const CSS_NEWS_ITEM: &str = ".row .js-content";
/// Article body paragraphs.
pub const CSS_NEWS_TEXT: &str = ".b-text p";

const CATEGORY_PATH_MARKER: &str = "/rubrics/";
const NEWS_PATH_MARKER: &str = "/news/";

/// Compiled selectors for one site layout.
#[derive(Debug, Clone)]
pub struct PageSelectors {
    category_item: Selector,
    news_item: Selector,
    news_text: Selector,
    link: Selector,
}

impl PageSelectors {
    pub fn new(category_item: &str, news_item: &str, news_text: &str) -> Result<Self> {
        Ok(Self {
            category_item: parse_selector(category_item)?,
            news_item: parse_selector(news_item)?,
            news_text: parse_selector(news_text)?,
            link: parse_selector("a[href]")?,
        })
    }

    /// Selectors for lenta.ru.
    pub fn lenta() -> Result<Self> {
        Self::new(CSS_CATEGORY_ITEM, CSS_NEWS_ITEM, CSS_NEWS_TEXT)
    }

    /// Category links from the site root, keyed by CategoryId in first-seen
    /// order. Each menu item contributes its first link; items whose link is
    /// not a `/rubrics/` page are skipped. A repeated ID keeps its first URL.
    pub fn extract_category_links(&self, html: &str, page_url: &Url) -> IndexMap<CategoryId, String> {
        let document = Html::parse_document(html);
        let mut categories = IndexMap::new();

        for item in document.select(&self.category_item) {
            let Some(link) = self.first_link(item, page_url) else {
                continue;
            };
            if !link.contains(CATEGORY_PATH_MARKER) {
                continue;
            }
            if let Some(id) = CategoryId::from_url(&link) {
                categories.entry(id).or_insert(link);
            }
        }

        categories
    }

    /// Article links from a category page: every link inside the first
    /// content block, deduplicated and sorted, restricted to `/news/` pages,
    /// truncated to `limit`.
    pub fn extract_news_links(&self, html: &str, page_url: &Url, limit: usize) -> Vec<String> {
        let document = Html::parse_document(html);
        let Some(container) = document.select(&self.news_item).next() else {
            return Vec::new();
        };

        let links: BTreeSet<String> = container
            .select(&self.link)
            .filter_map(|a| absolute_link(a, page_url))
            .collect();

        links
            .into_iter()
            .filter(|link| link.contains(NEWS_PATH_MARKER))
            .take(limit)
            .collect()
    }

    /// Article body: the text of each paragraph, trimmed, joined with single
    /// spaces. Empty paragraphs are skipped.
    pub fn extract_article_text(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        document
            .select(&self.news_text)
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The item's own href if it is a link, else its first descendant link.
    fn first_link(&self, item: ElementRef<'_>, page_url: &Url) -> Option<String> {
        absolute_link(item, page_url)
            .or_else(|| item.select(&self.link).find_map(|a| absolute_link(a, page_url)))
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("Invalid CSS selector {css:?}: {e}"))
}

/// Resolve an element's `href` against the page URL. Only http(s) targets
/// count; `mailto:`, `javascript:` and friends are ignored.
fn absolute_link(element: ElementRef<'_>, page_url: &Url) -> Option<String> {
    let href = element.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }
    let url = page_url.join(href).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url.to_string()),
        _ => None,
    }
}
