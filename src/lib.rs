//! Planscrape — harvests development-application notices from a council
//! eService portal into a local SQLite store.
//!
//! This library crate exposes the core modules for integration testing.

pub mod acquisition;
pub mod config;
pub mod error;
pub mod extraction;
pub mod pipeline;
pub mod store;
