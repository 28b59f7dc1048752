// Plain HTTP client for fetching HTML pages.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

/// Default site root to discover categories from.
pub const DEFAULT_SITE_URL: &str = "https://lenta.ru";

/// Per-request timeout. The site gives no guarantees, so cap it here rather
/// than hang a whole run on one slow article.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin reqwest wrapper returning page bodies as text.
pub struct SiteClient {
    client: reqwest::Client,
}

impl SiteClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("topwords/0.1 (word-frequency crawler)")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET a page and return its body. Non-2xx responses are errors.
    pub async fn get_html(&self, url: &Url) -> Result<String> {
        debug!(url = %url, "GET page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("{url} returned {status}");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {url}"))
    }
}
