//! Path utilities for storage and backup destinations.

use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory.
/// Storage paths given on the command line or in the config file may use
/// shell notation without going through a shell.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
