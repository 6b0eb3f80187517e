//! Helpers for interpreting configuration values.

use std::path::{Path, PathBuf};

/// Replace a leading `~` in `path` with the current user's home directory.
///
/// Paths that do not start with `~`, or that name another user's home
/// (`~alice/...`), are returned unchanged. If the home directory cannot be
/// determined the path is also returned unchanged.
pub fn expand_home_dir(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => {
            tracing::warn!(
                "Could not determine the home directory, using {} as is",
                path.display()
            );
            path.to_path_buf()
        }
    }
}
