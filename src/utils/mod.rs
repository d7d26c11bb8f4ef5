// Utility functions

use std::path::PathBuf;

/// Name of the per-user directory holding the optional config file
pub const APP_DIR_NAME: &str = ".research-assistant";

/// Get the ~/.research-assistant directory path.
///
/// Returns `None` when the home directory cannot be determined.
#[inline]
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(APP_DIR_NAME))
}

/// Get the default config file path (~/.research-assistant/config.toml).
#[inline]
pub fn default_config_path() -> Option<PathBuf> {
    app_dir().map(|p| p.join("config.toml"))
}

/// Keep at most `max_chars` characters of `text`.
///
/// Counts Unicode scalar values, not bytes, so the cut never lands inside a
/// multi-byte character.
///
/// # Example
/// ```ignore
/// use crate::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
