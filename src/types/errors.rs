use std::fmt;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug)]
pub enum TabError {
    /// Tab with the given ID was not found.
    NotFound(String),
    /// Refused to close the last remaining tab.
    LastTab,
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::NotFound(id) => write!(f, "Tab not found: {}", id),
            TabError::LastTab => write!(f, "Cannot close the last tab"),
        }
    }
}

impl std::error::Error for TabError {}

// === BookmarkError ===

/// Errors related to bookmark persistence.
#[derive(Debug)]
pub enum BookmarkError {
    /// An I/O error occurred while writing the bookmarks file.
    IoError(String),
    /// Failed to serialize the bookmark list.
    SerializationError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::IoError(msg) => write!(f, "Bookmark I/O error: {}", msg),
            BookmarkError::SerializationError(msg) => {
                write!(f, "Bookmark serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkError {}

// === HistoryError ===

/// Errors related to browsing history operations.
#[derive(Debug)]
pub enum HistoryError {
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::DatabaseError(msg) => write!(f, "History database error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}
