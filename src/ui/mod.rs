// Monarch UI layer — compiled only with the `gui` feature.

pub mod webview_app;
