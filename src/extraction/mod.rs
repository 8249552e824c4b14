//! HTML-to-record extraction.
//!
//! Turns one search-result page into development-application records. The
//! document traversal (`page`) is kept separate from the field mapping
//! (`applications`) so the extraction rules never touch the parsing
//! library's object model directly.

pub mod address;
pub mod applications;
pub mod page;

pub use applications::DevelopmentApplication;
