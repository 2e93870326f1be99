use serde::{Deserialize, Serialize};

/// Represents a single history entry for a visited page.
///
/// `id` is assigned by SQLite (AUTOINCREMENT) and is strictly increasing in
/// insertion order. `timestamp` is the store-assigned visit time, formatted
/// by SQLite's `CURRENT_TIMESTAMP` default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub url: String,
    pub timestamp: String,
}
