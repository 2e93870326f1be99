//! WebView-based browser window using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(TOOLBAR_JS)` injects the chrome (address
//!   field, navigation buttons, tab strip, history table, bookmark dialog)
//!   on every page the engine loads.
//! - One real WebView; tabs are modeled by the `TabManager` and switching
//!   tabs loads the activated tab's URL.
//! - IPC from JS → Rust via `window.ipc.postMessage()`.
//! - The engine's URL-changed notification arrives as a `url_changed` IPC
//!   message; `TabManager::notify_url_changed` fires the registered
//!   observers (history append among them), then the chrome is re-rendered
//!   from the stores. Full reload, no diffing.

use std::path::Path;
use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::app::{App, AppPaths};
use crate::managers::history_store::{HistoryStore, HistoryStoreTrait};
use crate::managers::tab_manager::TabManagerTrait;
use crate::services::theme_loader;
use crate::types::tab::NavAction;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
}

struct BrowserState {
    app: App,
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

// ─── IPC handler ───

fn handle_ipc(state: &mut BrowserState, message: &str) -> Option<UserEvent> {
    let msg: serde_json::Value = serde_json::from_str(message).ok()?;
    let cmd = msg.get("cmd")?.as_str()?;

    match cmd {
        "ui_ready" => {
            // Chrome just loaded on a page — push current tabs/history state
            Some(UserEvent::EvalScript(build_chrome_update(state)))
        }

        "navigate" => {
            let raw = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
            if raw.trim().is_empty() {
                return None;
            }
            state.app.tab_manager.load_url(raw).map(UserEvent::LoadUrl)
        }

        "back" => nav_script(state, NavAction::Back),
        "forward" => nav_script(state, NavAction::Forward),
        "reload" => nav_script(state, NavAction::Reload),

        "new_tab" => {
            state.app.tab_manager.open_tab(None);
            let url = state.app.tab_manager.home_url().to_string();
            Some(UserEvent::LoadUrl(url))
        }

        "close_tab" => match state.app.tab_manager.close_active_tab() {
            Ok(()) => restore_active(state),
            Err(e) => {
                // Last-tab refusal surfaces as a transient, auto-dismissing notice
                Some(UserEvent::EvalScript(show_toast(&e.to_string())))
            }
        },

        "switch_tab" => {
            let id = msg.get("id").and_then(|v| v.as_str())?;
            if state.app.tab_manager.activate(id).is_err() {
                return None;
            }
            restore_active(state)
        }

        "add_bookmark" => {
            let added = state.app.add_bookmark_for_active_tab().unwrap_or(false);
            let notice = if added {
                "Bookmark added"
            } else {
                "Already bookmarked"
            };
            Some(UserEvent::EvalScript(show_toast(notice)))
        }

        "show_bookmarks" => {
            let urls = serde_json::json!(state.app.bookmark_store.bookmarks());
            Some(UserEvent::EvalScript(format!(
                "if(window.__mb_showBookmarks)__mb_showBookmarks({})",
                urls
            )))
        }

        "url_changed" => {
            // Engine reported the active view's URL changed. Observers fire
            // in registration order (history append is registered in run()),
            // then the address field and history table are re-rendered.
            if let Some(url) = msg.get("url").and_then(|v| v.as_str()) {
                let url = url.to_string();
                state.app.tab_manager.notify_url_changed(&url);
            }
            Some(UserEvent::EvalScript(build_chrome_update(state)))
        }

        "nav_finished" => {
            if let Some(url) = msg.get("url").and_then(|v| v.as_str()) {
                let url = url.to_string();
                state.app.tab_manager.notify_navigation_finished(&url);
            }
            None
        }

        _ => None,
    }
}

fn nav_script(state: &BrowserState, action: NavAction) -> Option<UserEvent> {
    // Delegates to the engine's own session history; the engine no-ops
    // when it has no corresponding entry.
    let js = match state.app.tab_manager.navigate(action)? {
        NavAction::Back => "history.back()",
        NavAction::Forward => "history.forward()",
        NavAction::Reload => "location.reload()",
    };
    Some(UserEvent::EvalScript(js.to_string()))
}

/// Reloads the active tab's page after a switch or close. The load is a
/// restore of an already-open tab, not a navigation, so the URL-changed
/// observers are skipped for it and history records only real navigations.
fn restore_active(state: &mut BrowserState) -> Option<UserEvent> {
    let url = state.app.tab_manager.active_tab()?.url.clone();
    state.app.tab_manager.expect_engine_load(&url);
    Some(UserEvent::LoadUrl(url))
}

/// Clips an IPC payload for logging, backing up to a UTF-8 boundary so a
/// multibyte character straddling the limit cannot panic the slice.
pub fn log_preview(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

fn show_toast(text: &str) -> String {
    format!(
        "if(window.__mb_showToast)__mb_showToast({})",
        serde_json::Value::String(text.to_string())
    )
}

/// Full chrome refresh: tab strip, address field, history table.
fn build_chrome_update(state: &BrowserState) -> String {
    let tabs: Vec<serde_json::Value> = state
        .app
        .tab_manager
        .get_all_tabs()
        .iter()
        .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": t.url}))
        .collect();
    let active = state.app.tab_manager.active_tab();
    let url = active.map(|t| t.url.clone()).unwrap_or_default();
    let aid = active.map(|t| t.id.clone()).unwrap_or_default();
    let history: Vec<serde_json::Value> = state
        .app
        .history_descending()
        .unwrap_or_default()
        .iter()
        .map(|e| serde_json::json!({"url": e.url, "timestamp": e.timestamp}))
        .collect();
    format!(
        "if(window.__mb_update)__mb_update({})",
        serde_json::json!({"tabs": tabs, "activeId": aid, "url": url, "history": history})
    )
}

// ─── Window icon ───

fn load_window_icon(path: &Path) -> Option<tao::window::Icon> {
    let img = image::open(path).ok()?.into_rgba8();
    let (width, height) = img.dimensions();
    tao::window::Icon::from_rgba(img.into_raw(), width, height).ok()
}

// ─── Main entry point ───

pub fn run() {
    let paths = AppPaths::default();
    let mut app = App::new(paths.clone()).expect("Failed to initialize Monarch");

    // Observer wiring: history append on every URL change, in registration
    // order ahead of the chrome refresh performed by the IPC handler.
    let history_db = app.db.clone();
    app.tab_manager.on_url_changed(Box::new(move |url| {
        let mut store = HistoryStore::new(history_db.connection());
        if let Err(e) = store.append(url) {
            eprintln!("[HIST] append failed: {}", e);
        }
    }));
    app.tab_manager
        .on_navigation_finished(Box::new(|url| eprintln!("[NAV] finished {}", url)));

    let start_url = app
        .tab_manager
        .active_tab()
        .map(|t| t.url.clone())
        .unwrap_or_else(|| app.tab_manager.home_url().to_string());

    let state = Arc::new(Mutex::new(BrowserState { app }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let mut window_builder = WindowBuilder::new()
        .with_title("Monarch")
        .with_inner_size(tao::dpi::LogicalSize::new(1200.0, 800.0));

    // Optional window icon; absence is not an error
    match load_window_icon(&paths.window_icon) {
        Some(icon) => window_builder = window_builder.with_window_icon(Some(icon)),
        None => eprintln!("[ICON] {} not found, using default", paths.window_icon.display()),
    }

    let window = window_builder
        .build(&event_loop)
        .expect("Failed to create window");

    // Optional external stylesheet, applied once at startup; silently
    // skipped when absent
    let mut init_script = String::from(TOOLBAR_JS);
    if let Some(css) = theme_loader::load_stylesheet(&paths.stylesheet) {
        init_script.push_str("\nif(window.__mb_applyTheme)__mb_applyTheme(");
        init_script.push_str(&serde_json::Value::String(css).to_string());
        init_script.push_str(");");
    }

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_initialization_script(init_script.as_str())
        .with_url(&start_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", log_preview(body, 200));
            let mut s = ipc_state.lock().unwrap();
            if let Some(event) = handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    eprintln!("[LOAD] {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
            },

            _ => {}
        }
    });
}
