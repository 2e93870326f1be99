use std::cell::RefCell;
use std::rc::Rc;

use monarch::managers::tab_manager::{normalize_url, TabManager, TabManagerTrait};
use monarch::types::errors::TabError;
use monarch::types::tab::NavAction;

const HOME: &str = "https://home.test";

#[test]
fn test_open_tab_returns_unique_ids() {
    let mut mgr = TabManager::new(HOME);
    let id1 = mgr.open_tab(None);
    let id2 = mgr.open_tab(None);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_open_tab_becomes_active() {
    let mut mgr = TabManager::new(HOME);
    let id1 = mgr.open_tab(Some("https://a.test"));
    assert_eq!(mgr.active_tab().unwrap().id, id1);

    let id2 = mgr.open_tab(Some("https://b.test"));
    assert_eq!(mgr.active_tab().unwrap().id, id2);
}

#[test]
fn test_open_tab_without_url_uses_home() {
    let mut mgr = TabManager::new(HOME);
    let id = mgr.open_tab(None);
    assert_eq!(mgr.get_tab(&id).unwrap().url, HOME);
}

#[test]
fn test_open_tab_with_url() {
    let mut mgr = TabManager::new(HOME);
    let id = mgr.open_tab(Some("https://github.com"));
    assert_eq!(mgr.get_tab(&id).unwrap().url, "https://github.com");
}

#[test]
fn test_new_tab_has_placeholder_title() {
    let mut mgr = TabManager::new(HOME);
    let id = mgr.open_tab(None);
    assert_eq!(mgr.get_tab(&id).unwrap().title, "New Tab");
}

#[test]
fn test_close_last_tab_is_refused() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    let result = mgr.close_active_tab();
    assert!(matches!(result, Err(TabError::LastTab)));
    // The refusal must leave the tab count unchanged at 1
    assert_eq!(mgr.tab_count(), 1);
    assert!(mgr.active_tab().is_some());
}

#[test]
fn test_close_active_tab_activates_neighbor() {
    let mut mgr = TabManager::new(HOME);
    let id1 = mgr.open_tab(Some("https://a.test"));
    let id2 = mgr.open_tab(Some("https://b.test"));
    let id3 = mgr.open_tab(Some("https://c.test"));

    // Active is id3 (last opened); close it — previous neighbor activates
    mgr.close_active_tab().unwrap();
    assert_eq!(mgr.tab_count(), 2);
    assert_eq!(mgr.active_tab().unwrap().id, id2);
    let _ = (id1, id3);
}

#[test]
fn test_close_middle_tab_activates_next() {
    let mut mgr = TabManager::new(HOME);
    let _id1 = mgr.open_tab(Some("https://a.test"));
    let id2 = mgr.open_tab(Some("https://b.test"));
    let id3 = mgr.open_tab(Some("https://c.test"));

    mgr.activate(&id2).unwrap();
    mgr.close_active_tab().unwrap();
    // The tab that held the next index takes over
    assert_eq!(mgr.active_tab().unwrap().id, id3);
}

#[test]
fn test_close_leaves_exactly_one_active_tab() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);
    mgr.open_tab(None);
    mgr.open_tab(None);

    mgr.close_active_tab().unwrap();
    let active_id = mgr.active_tab().unwrap().id.clone();
    let count = mgr
        .get_all_tabs()
        .iter()
        .filter(|t| t.id == active_id)
        .count();
    assert_eq!(count, 1);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_activate_switches_tab() {
    let mut mgr = TabManager::new(HOME);
    let id1 = mgr.open_tab(None);
    let id2 = mgr.open_tab(None);
    assert_eq!(mgr.active_tab().unwrap().id, id2);

    mgr.activate(&id1).unwrap();
    assert_eq!(mgr.active_tab().unwrap().id, id1);
}

#[test]
fn test_activate_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);
    assert!(matches!(
        mgr.activate("nonexistent"),
        Err(TabError::NotFound(_))
    ));
}

#[test]
fn test_load_url_prepends_https_when_scheme_missing() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    let dispatched = mgr.load_url("example.com").unwrap();
    assert_eq!(dispatched, "https://example.com");
    assert_eq!(mgr.active_tab().unwrap().url, "https://example.com");
}

#[test]
fn test_load_url_keeps_explicit_scheme() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    assert_eq!(
        mgr.load_url("http://example.com").unwrap(),
        "http://example.com"
    );
    assert_eq!(
        mgr.load_url("https://example.com/a").unwrap(),
        "https://example.com/a"
    );
}

#[test]
fn test_load_url_does_not_rewrite_search_terms() {
    // Heuristic only: bare terms get a scheme, never a search-engine query
    assert_eq!(normalize_url("rust tutorial"), "https://rust tutorial");
}

#[test]
fn test_navigate_with_active_tab() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);
    assert_eq!(mgr.navigate(NavAction::Back), Some(NavAction::Back));
    assert_eq!(mgr.navigate(NavAction::Reload), Some(NavAction::Reload));
}

#[test]
fn test_navigate_without_tabs_is_noop() {
    let mgr = TabManager::new(HOME);
    assert_eq!(mgr.navigate(NavAction::Forward), None);
}

#[test]
fn test_url_changed_handlers_fire_in_registration_order() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    let log = Rc::new(RefCell::new(Vec::new()));
    let log1 = log.clone();
    let log2 = log.clone();
    mgr.on_url_changed(Box::new(move |url| {
        log1.borrow_mut().push(format!("first:{}", url));
    }));
    mgr.on_url_changed(Box::new(move |url| {
        log2.borrow_mut().push(format!("second:{}", url));
    }));

    mgr.notify_url_changed("https://a.test");
    assert_eq!(
        *log.borrow(),
        vec!["first:https://a.test", "second:https://a.test"]
    );
}

#[test]
fn test_url_changed_updates_active_tab_url() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);
    mgr.notify_url_changed("https://redirected.test");
    assert_eq!(mgr.active_tab().unwrap().url, "https://redirected.test");
}

#[test]
fn test_tab_restore_does_not_fire_url_changed_handlers() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(Some("https://a.test"));

    let log = Rc::new(RefCell::new(Vec::new()));
    let log2 = log.clone();
    mgr.on_url_changed(Box::new(move |url| {
        log2.borrow_mut().push(url.to_string());
    }));

    // Switching back to a tab reloads its page; that change is a restore
    mgr.expect_engine_load("https://a.test");
    mgr.notify_url_changed("https://a.test");
    assert!(log.borrow().is_empty());

    // The mark is consumed: the same URL arriving again is a navigation
    mgr.notify_url_changed("https://a.test");
    assert_eq!(*log.borrow(), vec!["https://a.test"]);
}

#[test]
fn test_tab_restore_still_updates_tab_model() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    mgr.expect_engine_load("https://a.test");
    mgr.notify_url_changed("https://a.test");
    assert_eq!(mgr.active_tab().unwrap().url, "https://a.test");
}

#[test]
fn test_unexpected_url_clears_restore_mark_and_fires() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    let log = Rc::new(RefCell::new(Vec::new()));
    let log2 = log.clone();
    mgr.on_url_changed(Box::new(move |url| {
        log2.borrow_mut().push(url.to_string());
    }));

    // A restore that redirects lands on a different URL: treated as a
    // navigation, and the stale mark must not suppress later changes
    mgr.expect_engine_load("https://a.test");
    mgr.notify_url_changed("https://b.test");
    mgr.notify_url_changed("https://a.test");
    assert_eq!(*log.borrow(), vec!["https://b.test", "https://a.test"]);
}

#[test]
fn test_navigation_finished_handlers_fire() {
    let mut mgr = TabManager::new(HOME);
    mgr.open_tab(None);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen2 = seen.clone();
    mgr.on_navigation_finished(Box::new(move |url| {
        seen2.borrow_mut().push(url.to_string());
    }));

    mgr.notify_navigation_finished("https://done.test");
    assert_eq!(*seen.borrow(), vec!["https://done.test"]);
}
