//! Platform-aware configuration paths for book-packer

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::core::constants::files;

/// Get the appropriate configuration directory for the current platform
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(custom_dir) = env::var("BOOK_PACKER_CONFIG_DIR") {
        return Ok(PathBuf::from(custom_dir));
    }

    dirs::config_dir()
        .map(|p| p.join("book-packer"))
        .context("Unable to determine config directory for the current platform")
}

/// Per-user configuration file, e.g. `~/.config/book-packer/config.toml`
pub fn global_config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(files::GLOBAL_CONFIG_FILE_NAME))
}

/// Project configuration file in the current directory
pub fn local_config_file() -> Result<PathBuf> {
    Ok(env::current_dir()
        .context("Unable to determine current directory")?
        .join(files::CONFIG_FILE_NAME))
}

/// Pick the configuration file to load.
///
/// An explicit path always wins, even if it does not exist, so a typo is
/// reported instead of silently falling back to defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    [local_config_file(), global_config_file()]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_file())
}
