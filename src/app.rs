//! App Core for Monarch.
//!
//! Central struct holding the stores and tab manager, constructed once at
//! startup and handed to the UI layer. The stores are explicit objects
//! passed by ownership rather than ambient globals, so tests can construct
//! an `App` against temporary paths and an in-memory database.

use std::path::PathBuf;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::bookmark_store::BookmarkStore;
use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::types::errors::{BookmarkError, HistoryError};
use crate::types::history::HistoryEntry;

/// Fallback address for new tabs when no local home document exists.
pub const DEFAULT_HOME_URL: &str = "https://www.example.com";

/// Fixed relative paths for the application's local resources.
///
/// The application launches with no CLI flags and consults no environment
/// variables; every external file lives at one of these paths.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub history_db: PathBuf,
    pub bookmarks_file: PathBuf,
    pub home_page: PathBuf,
    pub stylesheet: PathBuf,
    pub window_icon: PathBuf,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self {
            history_db: PathBuf::from("history.db"),
            bookmarks_file: PathBuf::from("bookmarks.json"),
            home_page: PathBuf::from("homepage.html"),
            stylesheet: PathBuf::from("theme.css"),
            window_icon: PathBuf::from("monarch.png"),
        }
    }
}

/// Resolves the home URL for new tabs: the local home document as a
/// `file://` URL when it exists on disk, else the fixed fallback address.
pub fn resolve_home_url(paths: &AppPaths) -> String {
    match paths.home_page.canonicalize() {
        Ok(abs) => file_url(&abs),
        Err(_) => DEFAULT_HOME_URL.to_string(),
    }
}

/// Builds a `file://` URL from a canonicalized absolute path. Windows
/// canonical paths carry a `\\?\` prefix and backslash separators that are
/// invalid in URLs.
fn file_url(abs: &std::path::Path) -> String {
    #[cfg(windows)]
    {
        let path = abs.display().to_string();
        let path = path.trim_start_matches(r"\\?\").replace('\\', "/");
        return format!("file:///{}", path);
    }
    #[cfg(not(windows))]
    format!("file://{}", abs.display())
}

/// Central application struct holding the stores and the tab manager.
///
/// `HistoryStore` is created on demand via `db.connection()` because it
/// borrows the connection with a lifetime parameter.
pub struct App {
    pub db: Arc<Database>,
    pub tab_manager: TabManager,
    pub bookmark_store: BookmarkStore,
    pub paths: AppPaths,
}

impl App {
    /// Creates a new App against the given paths.
    ///
    /// Opens the history database (fatal on failure — there is no retry
    /// logic), loads the bookmarks file (missing or malformed content loads
    /// as an empty list), resolves the home URL, and opens the initial tab
    /// so the manager never rests with zero tabs.
    pub fn new(paths: AppPaths) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(&paths.history_db)?);
        let bookmark_store = BookmarkStore::load(&paths.bookmarks_file);

        let mut tab_manager = TabManager::new(resolve_home_url(&paths));
        tab_manager.open_tab(None);

        Ok(Self {
            db,
            tab_manager,
            bookmark_store,
            paths,
        })
    }

    /// Appends one visit row for `url`. Called from the URL-changed observer.
    pub fn record_visit(&self, url: &str) -> Result<i64, HistoryError> {
        let mut store = HistoryStore::new(self.db.connection());
        store.append(url)
    }

    /// Full history, most recent first, for re-rendering the history table.
    pub fn history_descending(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        HistoryStore::new(self.db.connection()).list_descending()
    }

    /// Bookmarks the active tab's current URL. Returns whether anything was
    /// added (false when the URL is already bookmarked or no tab is active).
    pub fn add_bookmark_for_active_tab(&mut self) -> Result<bool, BookmarkError> {
        let url = match self.tab_manager.active_tab() {
            Some(tab) => tab.url.clone(),
            None => return Ok(false),
        };
        self.bookmark_store.add(&url)
    }
}
