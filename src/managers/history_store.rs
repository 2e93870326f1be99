//! History Store for Monarch.
//!
//! An append-only log of visited URLs backed by SQLite via `rusqlite`.
//! Rows are never updated or deleted; the display reads the full list in
//! reverse-insertion order on every refresh.

use rusqlite::{params, Connection};

use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;

/// Trait defining history store operations.
pub trait HistoryStoreTrait {
    fn append(&mut self, url: &str) -> Result<i64, HistoryError>;
    fn list_descending(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
}

/// History store backed by a SQLite connection.
pub struct HistoryStore<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryStore<'a> {
    /// Creates a new `HistoryStore` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Reads a single `HistoryEntry` row into a struct.
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: row.get(0)?,
            url: row.get(1)?,
            timestamp: row.get(2)?,
        })
    }
}

impl<'a> HistoryStoreTrait for HistoryStore<'a> {
    /// Inserts one visit row. The timestamp is assigned by the store
    /// (SQLite's CURRENT_TIMESTAMP default), not the caller. Returns the
    /// new row's id, strictly greater than all prior ids.
    fn append(&mut self, url: &str) -> Result<i64, HistoryError> {
        self.conn
            .execute("INSERT INTO history (url) VALUES (?1)", params![url])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns all rows ordered by id descending (most recent first).
    fn list_descending(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, url, timestamp FROM history ORDER BY id DESC")
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_entry)
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| HistoryError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }
}
