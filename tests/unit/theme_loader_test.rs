use monarch::services::theme_loader::load_stylesheet;
use tempfile::tempdir;

#[test]
fn test_missing_stylesheet_is_none() {
    let dir = tempdir().unwrap();
    assert!(load_stylesheet(dir.path().join("theme.css")).is_none());
}

#[test]
fn test_existing_stylesheet_is_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("theme.css");
    std::fs::write(&path, "body { background: #111; }").unwrap();

    let css = load_stylesheet(&path).unwrap();
    assert_eq!(css, "body { background: #111; }");
}
