//! Error taxonomy for a scrape run.
//!
//! Transport and storage failures are fatal and abort the run. Anything
//! per-record (a heading with no application number, an unparseable lodged
//! date, a duplicate key) is absorbed locally and never surfaces here.

use thiserror::Error;

/// A fatal failure during a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request itself failed (DNS, TLS, timeout, connection reset).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The portal answered with a non-success status.
    #[error("portal returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Schema creation or insert failed.
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}
