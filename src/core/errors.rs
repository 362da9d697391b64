//! Domain-specific error types for book-packer using thiserror
//!
//! Library code returns these structured errors so callers can match on the
//! failing stage. The CLI layer wraps them in `anyhow` with extra context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for book-packer operations
#[derive(Error, Debug)]
pub enum BookPackerError {
    #[error("File operation failed")]
    File(#[from] FileError),

    #[error("Extraction failed")]
    Extraction(#[from] ExtractionError),

    #[error("Packing failed")]
    Packing(#[from] PackingError),

    #[error("Export operation failed")]
    Export(#[from] ExportError),

    #[error("Configuration error")]
    Config(#[from] ConfigError),
}

/// Result type alias for book-packer operations
pub type PackerResult<T> = Result<T, BookPackerError>;

/// File operation errors
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read file {path}: {reason}")]
    ReadFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}: {reason}")]
    WriteFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },

    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid file path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Directory operation failed on {path}: {operation}")]
    DirectoryError {
        path: PathBuf,
        operation: String,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while pulling book fields out of a product page
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Missing required field '{field}' (selector: {selector})")]
    MissingField { field: String, selector: String },

    #[error("Invalid shipping weight '{text}': {reason}")]
    InvalidWeight { text: String, reason: String },

    #[error("Malformed {field} entry '{text}'")]
    MalformedField { field: String, text: String },

    #[error("Invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to extract book from {path}")]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<ExtractionError>,
    },
}

/// Input rejected by the greedy packer before any container is produced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PackingError {
    #[error("Item {index} has negative weight {weight}")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("Item {index} has non-finite weight {weight}")]
    NonFiniteWeight { index: usize, weight: f64 },

    #[error("Item {index} weighs {weight}, which exceeds the container capacity of {capacity}")]
    ExceedsCapacity {
        index: usize,
        weight: f64,
        capacity: f64,
    },

    #[error("Item {index} is already placed in a container")]
    AlreadyPlaced { index: usize },

    #[error("Invalid container capacity: {capacity}")]
    InvalidCapacity { capacity: f64 },
}

/// Export operation errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Export format not supported: {format}")]
    UnsupportedFormat { format: String },

    #[error("Serialization to {format} failed")]
    Serialization {
        format: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Export output is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to write export to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },
}

impl From<FileError> for ConfigError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::NotFound { path } => ConfigError::FileNotFound { path },
            FileError::ReadFailed { path, reason, .. } => ConfigError::ValidationFailed {
                reason: format!("Failed to read config file {}: {}", path.display(), reason),
            },
            _ => ConfigError::ValidationFailed {
                reason: err.to_string(),
            },
        }
    }
}

impl PackingError {
    /// Index of the item that caused the rejection, if any
    pub fn offending_index(&self) -> Option<usize> {
        match self {
            PackingError::NegativeWeight { index, .. }
            | PackingError::NonFiniteWeight { index, .. }
            | PackingError::ExceedsCapacity { index, .. }
            | PackingError::AlreadyPlaced { index } => Some(*index),
            PackingError::InvalidCapacity { .. } => None,
        }
    }
}

impl ExtractionError {
    /// Attach the page path to an extraction failure
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        ExtractionError::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Helper functions for common error patterns
impl FileError {
    pub fn read_error(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            return FileError::NotFound { path };
        }
        FileError::ReadFailed {
            path,
            reason: source.to_string(),
            source,
        }
    }

    pub fn write_error(path: PathBuf, source: io::Error) -> Self {
        FileError::WriteFailed {
            path,
            reason: source.to_string(),
            source,
        }
    }
}
