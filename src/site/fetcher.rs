// HTTP-backed ArticleFetcher.
//
// Category listings and articles are fetched one at a time. A failed article
// is logged and skipped so one broken page costs that article's words, not
// the whole category.

use anyhow::{Context, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use tracing::{debug, info, warn};
use url::Url;

use super::client::SiteClient;
use super::selectors::PageSelectors;
use super::traits::ArticleFetcher;
use crate::words::category::CategoryId;

pub struct SiteFetcher {
    client: SiteClient,
    site_url: Url,
    selectors: PageSelectors,
    count_news: usize,
}

impl SiteFetcher {
    /// `count_news` caps how many articles are read per category.
    pub fn new(site_url: &str, selectors: PageSelectors, count_news: usize) -> Result<Self> {
        let site_url =
            Url::parse(site_url).with_context(|| format!("Invalid site URL: {site_url}"))?;

        Ok(Self {
            client: SiteClient::new()?,
            site_url,
            selectors,
            count_news,
        })
    }

    pub fn site_url(&self) -> &Url {
        &self.site_url
    }

    async fn fetch_article_text(&self, news_url: &str) -> Result<String> {
        let url = Url::parse(news_url).with_context(|| format!("Invalid article URL: {news_url}"))?;
        let html = self.client.get_html(&url).await?;
        Ok(self.selectors.extract_article_text(&html))
    }
}

#[async_trait]
impl ArticleFetcher for SiteFetcher {
    async fn discover_categories(&self) -> Result<IndexMap<CategoryId, String>> {
        let html = self
            .client
            .get_html(&self.site_url)
            .await
            .with_context(|| format!("Failed to fetch site root {}", self.site_url))?;

        let categories = self.selectors.extract_category_links(&html, &self.site_url);
        info!(
            count = categories.len(),
            site = %self.site_url,
            "Discovered categories"
        );
        Ok(categories)
    }

    async fn fetch_article_texts(&self, category_url: &str) -> Result<Vec<String>> {
        let page_url = Url::parse(category_url)
            .with_context(|| format!("Invalid category URL: {category_url}"))?;
        let html = self.client.get_html(&page_url).await?;
        let news_urls = self
            .selectors
            .extract_news_links(&html, &page_url, self.count_news);

        debug!(
            category = category_url,
            articles = news_urls.len(),
            "Found article links"
        );

        let mut texts = Vec::with_capacity(news_urls.len());
        for news_url in &news_urls {
            match self.fetch_article_text(news_url).await {
                Ok(text) => texts.push(text),
                Err(e) => {
                    warn!(url = news_url.as_str(), error = %e, "Failed to fetch article, skipping");
                }
            }
        }

        Ok(texts)
    }
}
