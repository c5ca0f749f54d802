//! Path manipulation utilities for Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the Zellij
//! plugin sandbox, where the host filesystem is mounted under `/host`. It handles
//! tilde expansion, display normalization, and the plugin's data location.

use std::path::PathBuf;

/// Returns the data directory for Zanban files.
///
/// The directory is located at `/host/.local/share/zellij/zanban` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the
/// folder where Zellij was started, which is usually the home directory.
///
/// # Examples
///
/// ```
/// use zanban::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/zanban");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zanban")
}

/// Path of the plugin log file inside [`get_data_dir`].
#[must_use]
pub fn log_file_path() -> PathBuf {
    get_data_dir().join("zanban.log")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use zanban::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/boards/home.toml"), "/host/boards/home.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for display purposes.
///
/// # Examples
///
/// ```
/// use zanban::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/boards/home.toml"), "/boards/home.toml");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host").unwrap_or(path).to_string()
}
