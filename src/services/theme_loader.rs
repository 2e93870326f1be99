//! Optional external stylesheet loader.
//!
//! The stylesheet is applied once, process-wide, at application start.
//! Absence is not an error: the UI simply runs with its built-in styling.

use std::fs;
use std::path::Path;

/// Reads the stylesheet at `path`, returning `None` when the file is absent
/// or unreadable. Missing and unreadable are not distinguished.
pub fn load_stylesheet<P: AsRef<Path>>(path: P) -> Option<String> {
    fs::read_to_string(path.as_ref()).ok()
}
