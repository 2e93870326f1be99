//! Monarch — a minimal tabbed web browser with file-backed bookmarks and SQLite history.
//!
//! Entry point: opens the browser window. When built without the `gui`
//! feature, runs a console demo of the chrome-layer components instead.

#[cfg(feature = "gui")]
fn main() {
    monarch::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("Monarch v{} — demo mode (built without the gui feature)", env!("CARGO_PKG_VERSION"));
    println!();

    demo_database();
    demo_tabs();
    demo_bookmarks();
    demo_history();
    demo_app_core();

    println!("All components demonstrated.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("─── {} ───", name);
}

#[cfg(not(feature = "gui"))]
fn demo_database() {
    use monarch::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_tabs() {
    use monarch::managers::tab_manager::{normalize_url, TabManager, TabManagerTrait};
    section("Tab Manager");

    let mut mgr = TabManager::new("https://www.example.com");
    mgr.open_tab(None);
    mgr.open_tab(Some("https://rust-lang.org"));
    println!("  Opened 2 tabs, active = {}", mgr.active_tab().unwrap().url);

    println!("  normalize_url(\"example.com\") = {}", normalize_url("example.com"));

    mgr.close_active_tab().unwrap();
    println!("  Closed active tab, count = {}", mgr.tab_count());

    let refused = mgr.close_active_tab();
    println!("  Closing the last tab: {}", refused.unwrap_err());
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_bookmarks() {
    use monarch::managers::bookmark_store::BookmarkStore;
    section("Bookmark Store");

    let path = std::env::temp_dir().join("monarch_demo_bookmarks.json");
    let _ = std::fs::remove_file(&path);

    let mut store = BookmarkStore::load(&path);
    store.add("https://github.com").unwrap();
    store.add("https://docs.rs").unwrap();
    let dup = store.add("https://github.com").unwrap();
    println!("  Added 2 bookmarks, duplicate rejected = {}", !dup);
    println!("  Bookmarks: {:?}", store.bookmarks());

    let _ = std::fs::remove_file(&path);
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_history() {
    use monarch::database::connection::Database;
    use monarch::managers::history_store::{HistoryStore, HistoryStoreTrait};
    section("History Store");

    let db = Database::open_in_memory().unwrap();
    let mut store = HistoryStore::new(db.connection());

    store.append("https://github.com").unwrap();
    store.append("https://rust-lang.org").unwrap();

    let entries = store.list_descending().unwrap();
    println!("  Recorded {} visits, most recent first: {}", entries.len(), entries[0].url);
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use monarch::app::{App, AppPaths};
    use monarch::managers::tab_manager::TabManagerTrait;
    section("App Core");

    let dir = std::env::temp_dir().join("monarch_demo_app");
    std::fs::create_dir_all(&dir).ok();
    let paths = AppPaths {
        history_db: dir.join("history.db"),
        bookmarks_file: dir.join("bookmarks.json"),
        home_page: dir.join("homepage.html"),
        stylesheet: dir.join("theme.css"),
        window_icon: dir.join("monarch.png"),
    };

    let app = App::new(paths).unwrap();
    println!("  Initial tab count = {}", app.tab_manager.tab_count());
    println!("  Home URL = {}", app.tab_manager.home_url());

    let _ = std::fs::remove_dir_all(&dir);
    println!();
}
