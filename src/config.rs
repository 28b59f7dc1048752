use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::site::client::DEFAULT_SITE_URL;
use crate::site::selectors::{PageSelectors, CSS_CATEGORY_ITEM, CSS_NEWS_ITEM, CSS_NEWS_TEXT};

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags are applied on top with `with_overrides`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Output directory for the per-category CSV files (created if absent)
    pub data_dir: PathBuf,
    /// Max rows per category table
    pub count_words: usize,
    /// Max articles fetched per category
    pub count_news: usize,
    /// Root page to discover categories from
    pub site_url: String,
    /// Optional `form<TAB>lemma` dictionary consulted before the stemmer
    pub lemma_dict: Option<PathBuf>,
    /// How many categories are fetched at once (1 = strictly sequential)
    pub concurrency: usize,
    pub css_category_item: String,
    pub css_news_item: String,
    pub css_news_text: String,
}

/// Values given on the command line; `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub data_dir: Option<PathBuf>,
    pub count_words: Option<usize>,
    pub count_news: Option<usize>,
    pub site_url: Option<String>,
    pub lemma_dict: Option<PathBuf>,
    pub concurrency: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            count_words: 20,
            count_news: 10,
            site_url: DEFAULT_SITE_URL.to_string(),
            lemma_dict: None,
            concurrency: 1,
            css_category_item: CSS_CATEGORY_ITEM.to_string(),
            css_news_item: CSS_NEWS_ITEM.to_string(),
            css_news_text: CSS_NEWS_TEXT.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            data_dir: get("TOPWORDS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            count_words: parse_usize("TOPWORDS_COUNT_WORDS", get("TOPWORDS_COUNT_WORDS"))?
                .unwrap_or(defaults.count_words),
            count_news: parse_usize("TOPWORDS_COUNT_NEWS", get("TOPWORDS_COUNT_NEWS"))?
                .unwrap_or(defaults.count_news),
            site_url: get("TOPWORDS_SITE_URL").unwrap_or(defaults.site_url),
            lemma_dict: get("TOPWORDS_LEMMA_DICT").map(PathBuf::from),
            concurrency: parse_usize("TOPWORDS_CONCURRENCY", get("TOPWORDS_CONCURRENCY"))?
                .unwrap_or(defaults.concurrency),
            css_category_item: get("TOPWORDS_CSS_CATEGORY").unwrap_or(defaults.css_category_item),
            css_news_item: get("TOPWORDS_CSS_NEWS").unwrap_or(defaults.css_news_item),
            css_news_text: get("TOPWORDS_CSS_TEXT").unwrap_or(defaults.css_news_text),
        })
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(v) = overrides.data_dir {
            self.data_dir = v;
        }
        if let Some(v) = overrides.count_words {
            self.count_words = v;
        }
        if let Some(v) = overrides.count_news {
            self.count_news = v;
        }
        if let Some(v) = overrides.site_url {
            self.site_url = v;
        }
        if let Some(v) = overrides.lemma_dict {
            self.lemma_dict = Some(v);
        }
        if let Some(v) = overrides.concurrency {
            self.concurrency = v;
        }
        self
    }

    /// Check the values that would otherwise fail deep inside a run.
    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 {
            anyhow::bail!("concurrency must be at least 1");
        }
        url::Url::parse(&self.site_url)
            .with_context(|| format!("Invalid site URL: {}", self.site_url))?;
        if let Some(ref path) = self.lemma_dict {
            if !path.is_file() {
                anyhow::bail!("Lemma dictionary not found: {}", path.display());
            }
        }
        Ok(())
    }

    /// Compile the configured CSS selectors.
    pub fn selectors(&self) -> Result<PageSelectors> {
        PageSelectors::new(
            &self.css_category_item,
            &self.css_news_item,
            &self.css_news_text,
        )
    }
}

fn parse_usize(key: &str, value: Option<String>) -> Result<Option<usize>> {
    value
        .map(|v| {
            v.trim()
                .parse::<usize>()
                .with_context(|| format!("{key} must be a non-negative integer, got {v:?}"))
        })
        .transpose()
}
