//! Portal acquisition: the two-hop session-then-search protocol.
//!
//! The portal only honors a dated search from a client that already holds a
//! session cookie, and the cookie is only issued by loading the portal
//! landing page. Hop 1 (`session`) primes the cookie jar; hop 2 (`search`)
//! issues the dated query reusing it. The order is mandatory.

pub mod http_client;
pub mod search;
pub mod session;

pub use http_client::HttpClient;
