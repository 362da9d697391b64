//! Path validation utilities for security
//!
//! Paths given on the command line are checked before any file is read or
//! written:
//! - Path traversal (`..` components)
//! - Null bytes and invalid UTF-8
//! - Data directories that do not exist

use std::path::{Component, Path, PathBuf};

use crate::core::errors::FileError;

/// Validates a user-provided path that may not exist yet (e.g. an output file)
pub fn validate_path(path: &Path) -> Result<PathBuf, FileError> {
    let path_str = path.to_str().ok_or_else(|| invalid(path, "Path contains invalid UTF-8"))?;

    if path_str.is_empty() {
        return Err(invalid(path, "Path is empty"));
    }

    if path_str.contains('\0') {
        return Err(invalid(path, "Path contains null bytes"));
    }

    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid(path, "Path traversal detected"));
    }

    Ok(path.to_path_buf())
}

/// Validates a directory that must already exist and returns its canonical form
pub fn validate_existing_dir(path: &Path) -> Result<PathBuf, FileError> {
    let validated = validate_path(path)?;

    let canonical = validated.canonicalize().map_err(|_| FileError::NotFound {
        path: validated.clone(),
    })?;

    if !canonical.is_dir() {
        return Err(invalid(path, "Not a directory"));
    }

    Ok(canonical)
}

fn invalid(path: &Path, reason: &str) -> FileError {
    FileError::InvalidPath {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
