use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::{NavAction, Tab};

/// Handler invoked with the current URL when the engine reports a change.
pub type UrlHandler = Box<dyn FnMut(&str)>;

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn open_tab(&mut self, url: Option<&str>) -> String;
    fn close_active_tab(&mut self) -> Result<(), TabError>;
    fn activate(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn active_tab(&self) -> Option<&Tab>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
    /// Normalizes `raw`, records it on the active tab, and returns the URL
    /// to dispatch to the engine. `None` when no tab is active.
    fn load_url(&mut self, raw: &str) -> Option<String>;
    /// Forwards a Back/Forward/Reload command to the engine's own session
    /// history. `None` when no tab is active; the engine itself no-ops when
    /// it has no corresponding history entry.
    fn navigate(&self, action: NavAction) -> Option<NavAction>;
}

/// In-memory tab manager for the browser.
///
/// Owns the tab collection and the active-tab pointer. The embedded engine
/// view lives in the UI layer; the manager only models tab state and relays
/// engine notifications to registered observers.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
    home_url: String,
    url_changed_handlers: Vec<UrlHandler>,
    nav_finished_handlers: Vec<UrlHandler>,
    expected_engine_load: Option<String>,
}

/// Prepends `https://` when the input lacks an explicit scheme.
///
/// This is a heuristic, not a URL validator: bare search terms are not
/// rewritten into search-engine queries.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

impl TabManager {
    /// Creates a manager with the given home URL for tabs opened without an
    /// explicit address. No tab is opened here; the App opens the initial
    /// tab at construction.
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
            home_url: home_url.into(),
            url_changed_handlers: Vec::new(),
            nav_finished_handlers: Vec::new(),
            expected_engine_load: None,
        }
    }

    /// The home URL tabs open on when no address is given.
    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    /// Registers a handler for the engine's URL-changed notification.
    /// Handlers fire synchronously on the UI thread, in registration order.
    pub fn on_url_changed(&mut self, handler: UrlHandler) {
        self.url_changed_handlers.push(handler);
    }

    /// Registers a handler for the engine's navigation-finished notification.
    /// Handlers fire synchronously on the UI thread, in registration order.
    pub fn on_navigation_finished(&mut self, handler: UrlHandler) {
        self.nav_finished_handlers.push(handler);
    }

    /// Marks the next engine-reported change to `url` as a tab restore (the
    /// single view reloading an already-open tab's page) rather than a
    /// navigation. The tab model still updates for it, but handlers are
    /// skipped, so restores leave no history rows. Any other URL clears the
    /// mark and fires normally.
    pub fn expect_engine_load(&mut self, url: &str) {
        self.expected_engine_load = Some(url.to_string());
    }

    /// Called by the UI layer when the engine reports a URL change on the
    /// active tab. Updates the tab model, then fires handlers in order
    /// unless this change was marked as a tab restore.
    pub fn notify_url_changed(&mut self, url: &str) {
        if let Some(id) = self.active_tab_id.clone() {
            if let Some(tab) = self.tabs.iter_mut().find(|t| t.id == id) {
                tab.url = url.to_string();
            }
        }
        if self.expected_engine_load.take().as_deref() == Some(url) {
            return;
        }
        for handler in &mut self.url_changed_handlers {
            handler(url);
        }
    }

    /// Called by the UI layer when the engine reports a finished navigation.
    pub fn notify_navigation_finished(&mut self, url: &str) {
        for handler in &mut self.nav_finished_handlers {
            handler(url);
        }
    }
}

impl TabManagerTrait for TabManager {
    /// Open a new tab bound to `url`, or to the configured home URL when
    /// absent. The new tab becomes active. Returns the new tab's ID.
    fn open_tab(&mut self, url: Option<&str>) -> String {
        let id = Uuid::new_v4().to_string();
        let tab = Tab {
            id: id.clone(),
            url: url.unwrap_or(&self.home_url).to_string(),
            title: "New Tab".to_string(),
            created_at: Self::now(),
        };
        self.tabs.push(tab);
        self.active_tab_id = Some(id.clone());
        id
    }

    /// Close the active tab and activate a deterministic neighbor (the tab
    /// that held the next lower index, or the new last tab when the closed
    /// tab was at the end). Refused with `TabError::LastTab` when exactly
    /// one tab remains — the caller surfaces a transient notice instead.
    fn close_active_tab(&mut self) -> Result<(), TabError> {
        if self.tabs.len() <= 1 {
            return Err(TabError::LastTab);
        }

        let active_id = self
            .active_tab_id
            .clone()
            .ok_or_else(|| TabError::NotFound(String::new()))?;
        let idx = self
            .find_tab_index(&active_id)
            .ok_or(TabError::NotFound(active_id))?;

        self.tabs.remove(idx);

        let neighbor = if idx < self.tabs.len() {
            idx
        } else {
            self.tabs.len() - 1
        };
        self.active_tab_id = Some(self.tabs[neighbor].id.clone());

        Ok(())
    }

    /// Switch the active tab to the given tab_id (tab-strip click).
    fn activate(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn load_url(&mut self, raw: &str) -> Option<String> {
        let id = self.active_tab_id.clone()?;
        let url = normalize_url(raw);
        let tab = self.tabs.iter_mut().find(|t| t.id == id)?;
        tab.url = url.clone();
        Some(url)
    }

    fn navigate(&self, action: NavAction) -> Option<NavAction> {
        self.active_tab().map(|_| action)
    }
}
