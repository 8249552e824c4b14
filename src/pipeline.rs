//! One scrape run, end to end.
//!
//! Strictly linear: open store → build client → establish session → dated
//! search → extract → insert each record in document order. Extraction runs
//! in a blocking task because `scraper::Html` is not `Send`; everything
//! else awaits in sequence. Transport and storage failures abort the run;
//! rows inserted before the failure stay committed.

use crate::acquisition::{search, session, HttpClient};
use crate::config::Config;
use crate::error::ScrapeError;
use crate::extraction::applications;
use crate::store::{ApplicationStore, InsertOutcome};
use chrono::Local;
use std::path::Path;
use tracing::info;

/// Counts for the final status line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Execute one full scrape run against the configured portal.
pub async fn run(config: &Config) -> Result<RunSummary, ScrapeError> {
    let store = ApplicationStore::open(Path::new(&config.database_path))?;
    store.ensure_schema()?;

    let client = HttpClient::new(config.timeout_ms)?;
    session::establish(&client, config).await?;

    let today = Local::now().date_naive();
    let html = search::fetch_results(&client, config, today).await?;

    // Extract in a blocking task (scraper is not Send).
    let extract_config = config.clone();
    let records =
        tokio::task::spawn_blocking(move || applications::extract(&html, &extract_config, today))
            .await
            .unwrap_or_default();

    info!(count = records.len(), "extracted candidate applications");

    let mut summary = RunSummary::default();
    for record in &records {
        match store.insert_if_absent(record)? {
            InsertOutcome::Inserted => {
                println!(
                    "Inserted {} at {}",
                    record.council_reference, record.address
                );
                summary.inserted += 1;
            }
            InsertOutcome::Skipped => {
                println!("Skipped {} (already seen)", record.council_reference);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
