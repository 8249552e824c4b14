//! Dated search — hop 2 of the portal protocol.
//!
//! Computes the one-month lookback window, formats it the way the portal
//! expects (`DD/MM/YYYY`, percent-encoded), substitutes it into the search
//! URL template, and fetches the result page reusing the session cookie
//! from hop 1.

use crate::acquisition::HttpClient;
use crate::config::Config;
use crate::error::ScrapeError;
use chrono::{Months, NaiveDate};
use tracing::debug;
use url::form_urlencoded;

/// One calendar month back from `today`, inclusive of both ends.
///
/// `checked_sub_months` clamps at month boundaries, so 31 March looks back
/// to the last day of February.
pub fn lookback_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let from = today
        .checked_sub_months(Months::new(1))
        .unwrap_or(today);
    (from, today)
}

/// Format a date as the portal's `DD/MM/YYYY` and percent-encode it for
/// embedding in a query string (the slashes become `%2F`).
fn encode_date(date: NaiveDate) -> String {
    let formatted = date.format("%d/%m/%Y").to_string();
    form_urlencoded::byte_serialize(formatted.as_bytes()).collect()
}

/// Substitute the window into the search URL template.
pub fn build_search_url(template: &str, from: NaiveDate, to: NaiveDate) -> String {
    template
        .replace("{dateFrom}", &encode_date(from))
        .replace("{dateTo}", &encode_date(to))
}

/// Issue the dated search and return the raw HTML of the result page.
///
/// Must run after `session::establish` on the same client — the portal
/// ignores searches from cookie-less clients.
pub async fn fetch_results(
    client: &HttpClient,
    config: &Config,
    today: NaiveDate,
) -> Result<String, ScrapeError> {
    let (from, to) = lookback_window(today);
    let url = build_search_url(&config.search_url_template, from, to);
    debug!(%from, %to, "fetching search results");
    client.get(&url).await
}
