//! Session acquisition — hop 1 of the portal protocol.
//!
//! One GET against the portal landing page. The body is irrelevant; the
//! point is the `Set-Cookie` the server attaches, which lands in the
//! client's cookie jar and authorizes the search that follows. The cookie's
//! name and value are server-controlled and never inspected here.

use crate::acquisition::HttpClient;
use crate::config::Config;
use crate::error::ScrapeError;
use tracing::debug;

/// Prime the client's cookie jar by loading the portal landing page.
///
/// Fatal on network error or non-success status — without the session
/// cookie the search hop would return an empty, unauthenticated page.
pub async fn establish(client: &HttpClient, config: &Config) -> Result<(), ScrapeError> {
    debug!(url = %config.portal_url, "establishing portal session");
    client.get(&config.portal_url).await?;
    Ok(())
}
