#![cfg(feature = "gui")]

use monarch::ui::webview_app::log_preview;

#[test]
fn test_log_preview_short_payload_passes_through() {
    let payload = "{\"cmd\":\"ui_ready\"}";
    assert_eq!(log_preview(payload, 200), payload);
}

#[test]
fn test_log_preview_clips_ascii_at_limit() {
    let payload = "a".repeat(300);
    assert_eq!(log_preview(&payload, 200), "a".repeat(200));
}

#[test]
fn test_log_preview_backs_up_over_multibyte_character() {
    // A 2-byte character straddling the limit must not split
    let mut payload = "a".repeat(199);
    payload.push('é');
    payload.push_str("rest of a long url_changed payload");

    let preview = log_preview(&payload, 200);
    assert_eq!(preview, "a".repeat(199));
    assert!(preview.len() <= 200);
}

#[test]
fn test_log_preview_handles_multibyte_only_payload() {
    let payload = "é".repeat(150);
    let preview = log_preview(&payload, 7);
    assert_eq!(preview, "ééé");
}
