// Monarch state managers
// Managers handle stateful operations: tabs, bookmarks, history.

pub mod bookmark_store;
pub mod history_store;
pub mod tab_manager;
