use serde::{Deserialize, Serialize};

/// Represents a browser tab with its current state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}

/// A navigation command forwarded to the embedded engine's session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Forward,
    Reload,
}
