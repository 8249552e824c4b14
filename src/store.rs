//! SQLite persistence sink.
//!
//! One table keyed by the council reference, one connection opened at start
//! of the run and dropped at exit. Inserts use `INSERT OR IGNORE`, so a
//! record already seen on an earlier run is a reported skip, never an
//! error. Each insert is its own implicit transaction; a failure later in a
//! run leaves earlier rows committed.

use crate::error::ScrapeError;
use crate::extraction::DevelopmentApplication;
use rusqlite::Connection;
use std::path::Path;

/// Whether an insert actually wrote a row. For logging only — callers must
/// not branch behavior on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    Skipped,
}

/// SQLite-backed store of development applications.
pub struct ApplicationStore {
    db: Connection,
}

impl ApplicationStore {
    /// Open (or create) the database file.
    pub fn open(path: &Path) -> Result<Self, ScrapeError> {
        let db = Connection::open(path)?;
        Ok(Self { db })
    }

    /// Idempotently create the applications table.
    ///
    /// `on_notice_from` / `on_notice_to` are part of the downstream schema
    /// but never populated by this scraper.
    pub fn ensure_schema(&self) -> Result<(), ScrapeError> {
        self.db.execute_batch(
            "CREATE TABLE IF NOT EXISTS applications (
                council_reference TEXT PRIMARY KEY,
                address TEXT,
                description TEXT,
                info_url TEXT,
                comment_url TEXT,
                date_scraped TEXT,
                date_received TEXT,
                on_notice_from TEXT,
                on_notice_to TEXT
            );",
        )?;
        Ok(())
    }

    /// Insert a record unless its council reference is already present.
    pub fn insert_if_absent(
        &self,
        record: &DevelopmentApplication,
    ) -> Result<InsertOutcome, ScrapeError> {
        let rows = self.db.execute(
            "INSERT OR IGNORE INTO applications (
                council_reference, address, description, info_url, comment_url,
                date_scraped, date_received, on_notice_from, on_notice_to
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, NULL)",
            rusqlite::params![
                record.council_reference,
                record.address,
                record.description,
                record.info_url,
                record.comment_url,
                record.date_scraped,
                record.date_received,
            ],
        )?;

        Ok(if rows == 0 {
            InsertOutcome::Skipped
        } else {
            InsertOutcome::Inserted
        })
    }

    /// Number of stored applications.
    pub fn count(&self) -> Result<i64, ScrapeError> {
        let n = self
            .db
            .query_row("SELECT COUNT(*) FROM applications", [], |row| row.get(0))?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(reference: &str) -> DevelopmentApplication {
        DevelopmentApplication {
            council_reference: reference.to_string(),
            address: "10 Park Lane SA 5091".to_string(),
            description: "Fence".to_string(),
            info_url: "https://portal".to_string(),
            comment_url: "mailto:dap@example.org".to_string(),
            date_scraped: "2019-06-20".to_string(),
            date_received: "2019-06-01".to_string(),
        }
    }

    fn open_store() -> (tempfile::TempDir, ApplicationStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ApplicationStore::open(&dir.path().join("test.sqlite")).unwrap();
        store.ensure_schema().unwrap();
        (dir, store)
    }

    #[test]
    fn test_insert_then_skip_duplicate() {
        let (_dir, store) = open_store();

        let outcome = store.insert_if_absent(&record("123/2019")).unwrap();
        assert_eq!(outcome, InsertOutcome::Inserted);

        let outcome = store.insert_if_absent(&record("123/2019")).unwrap();
        assert_eq!(outcome, InsertOutcome::Skipped);

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_schema_creation_is_idempotent() {
        let (_dir, store) = open_store();
        store.ensure_schema().unwrap();
        store.insert_if_absent(&record("1/2019")).unwrap();
        store.ensure_schema().unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_notice_period_columns_stay_null() {
        let (_dir, store) = open_store();
        store.insert_if_absent(&record("1/2019")).unwrap();

        let nulls: i64 = store
            .db
            .query_row(
                "SELECT COUNT(*) FROM applications
                 WHERE on_notice_from IS NULL AND on_notice_to IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 1);
    }
}
