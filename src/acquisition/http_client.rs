//! HTTP client wrapping reqwest.
//!
//! Not a browser — just GET requests with a cookie jar. A fresh client means
//! a fresh, empty jar; whatever session cookie the portal sets on the first
//! request is replayed automatically on the next one. No retry: a failed
//! request is fatal for the run.

use crate::error::ScrapeError;
use std::time::Duration;

/// HTTP client for the two portal requests of one run.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client with an empty cookie jar and a standard browser
    /// user-agent (the portal serves a reduced page to unknown agents).
    pub fn new(timeout_ms: u64) -> Result<Self, ScrapeError> {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()?;

        Ok(Self { client })
    }

    /// GET a URL and return the body text.
    ///
    /// Any non-success status is an error: the portal has no meaningful
    /// non-2xx responses for these endpoints.
    pub async fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.text().await?)
    }
}
