//! Monarch — a minimal tabbed web browser with file-backed bookmarks and SQLite history.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
