//! Fixed portal endpoints and scrape settings.
//!
//! The portal URLs, the contact address, and the one-month lookback are
//! deliberately constants: there is no CLI or environment configuration for
//! this scraper. `Config` exists so the values are built once at startup and
//! threaded through immutably (and so tests can point a run at a mock
//! server) rather than living as mutable globals.

/// Landing page of the council's eService portal. Loading it is what makes
/// the server issue the session cookie required by the search endpoint.
const PORTAL_URL: &str =
    "https://eservices.teatreegully.sa.gov.au/eservice/daEnquiryInit.do?nodeNum=21734";

/// Dated search endpoint. `{dateFrom}` and `{dateTo}` are the only variable
/// parts; every other query parameter (empty number filter, search mode,
/// submit flag) is fixed by the portal.
const SEARCH_URL_TEMPLATE: &str = "https://eservices.teatreegully.sa.gov.au/eservice/daEnquiry.do?\
     number=&lodgeRangeType=on&dateFrom={dateFrom}&dateTo={dateTo}\
     &detDateFromString=&detDateToString=&streetName=&suburbName=&unitNum=&houseNum=0\
     &searchMode=A&submitButton=Search";

/// Where planning comments are directed.
const COMMENT_URL: &str = "mailto:customerservice@cttg.sa.gov.au";

/// SQLite database file, relative to the working directory.
const DATABASE_PATH: &str = "data.sqlite";

/// Per-request timeout in milliseconds.
const HTTP_TIMEOUT_MS: u64 = 30_000;

/// Immutable run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Portal landing page; also recorded verbatim as each record's info URL.
    pub portal_url: String,
    /// Search URL with `{dateFrom}` / `{dateTo}` placeholders.
    pub search_url_template: String,
    /// Mail contact recorded on every record.
    pub comment_url: String,
    /// Path of the SQLite database file.
    pub database_path: String,
    /// HTTP timeout applied to both portal requests.
    pub timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            portal_url: PORTAL_URL.to_string(),
            search_url_template: SEARCH_URL_TEMPLATE.to_string(),
            comment_url: COMMENT_URL.to_string(),
            database_path: DATABASE_PATH.to_string(),
            timeout_ms: HTTP_TIMEOUT_MS,
        }
    }
}
