//! Path utilities for locating local application data.

use std::path::PathBuf;

/// Directory name under the platform data directory.
const APP_DIR: &str = "tablescout";

/// Returns the default data directory for Tablescout storage and traces.
///
/// Resolves to the platform data directory (`~/.local/share` on Linux,
/// `~/Library/Application Support` on macOS) joined with `tablescout`. Falls
/// back to `./.tablescout` when the platform has no data directory.
///
/// # Examples
///
/// ```
/// use tablescout::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("tablescout") || data_dir.ends_with(".tablescout"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".tablescout"), |dir| dir.join(APP_DIR))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and every path when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use tablescout::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
