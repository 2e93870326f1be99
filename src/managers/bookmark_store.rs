//! Bookmark Store for Monarch.
//!
//! An ordered list of URL strings persisted as a JSON array in a flat file.
//! The whole file is read once at startup and rewritten on every addition.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::errors::BookmarkError;

/// File-backed bookmark store.
///
/// Uniqueness is enforced by a linear scan before insertion; iteration order
/// is first-insertion order. Bookmarks are never deleted.
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<String>,
}

impl BookmarkStore {
    /// Loads the store from `path`.
    ///
    /// A missing file and malformed content are treated identically: both
    /// yield an empty list, never an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let bookmarks = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<Vec<String>>(&content).ok())
            .unwrap_or_default();
        Self { path, bookmarks }
    }

    /// Appends `url` if it is not already present (exact string match),
    /// then saves. Returns whether anything was added.
    pub fn add(&mut self, url: &str) -> Result<bool, BookmarkError> {
        if self.bookmarks.iter().any(|b| b == url) {
            return Ok(false);
        }
        self.bookmarks.push(url.to_string());
        self.save()?;
        Ok(true)
    }

    /// Overwrites the persisted file with the current list.
    pub fn save(&self) -> Result<(), BookmarkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    BookmarkError::IoError(format!("Failed to create bookmarks directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string(&self.bookmarks).map_err(|e| {
            BookmarkError::SerializationError(format!("Failed to serialize bookmarks: {}", e))
        })?;

        fs::write(&self.path, json)
            .map_err(|e| BookmarkError::IoError(format!("Failed to write bookmarks file: {}", e)))
    }

    pub fn contains(&self, url: &str) -> bool {
        self.bookmarks.iter().any(|b| b == url)
    }

    /// Bookmarked URLs in first-insertion order.
    pub fn bookmarks(&self) -> &[String] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
