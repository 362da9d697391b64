//! Configuration for book-packer
//!
//! Settings come from built-in defaults, then a TOML file, then CLI flags.
//! The file is looked up as `--config`, else `.book-packer.toml` in the
//! current directory, else `config.toml` in the platform config directory.

pub mod paths;
pub mod validation;

pub use paths::{config_dir, global_config_file, local_config_file, resolve_config_path};
pub use validation::{ConfigValidator, ValidationReport};

use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::core::constants::{export, files, packing};
use crate::core::errors::{ConfigError, FileError};
use crate::core::ExportFormat;

/// Configuration actions for book-packer
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigAction {
    /// Initialize configuration file in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key, e.g. packing.capacity
        key: String,
        /// Configuration value
        value: String,
    },
    /// Check the configuration and data directory
    Validate,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackerConfig {
    pub packing: PackingConfig,
    pub extraction: ExtractionConfig,
    pub export: ExportConfig,
}

/// Box capacity settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingConfig {
    /// Maximum weight per box, in pounds
    pub capacity: f64,
}

/// Where product pages come from and how gaps are filled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub data_dir: PathBuf,
    pub fallback_price: String,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: ExportFormat,
    pub output_file: PathBuf,
    pub indent: usize,
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            capacity: packing::DEFAULT_CAPACITY,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(files::DEFAULT_DATA_DIR),
            fallback_price: files::DEFAULT_FALLBACK_PRICE.to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::Json,
            output_file: PathBuf::from(files::DEFAULT_OUTPUT_FILE),
            indent: export::DEFAULT_JSON_INDENT,
        }
    }
}

/// Keys accepted by [`PackerConfig::set`]
pub const CONFIG_KEYS: &[&str] = &[
    "packing.capacity",
    "extraction.data_dir",
    "extraction.fallback_price",
    "export.format",
    "export.output_file",
    "export.indent",
];

impl PackerConfig {
    /// Load and validate a configuration file
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| FileError::read_error(path.to_path_buf(), e))?;

        let config = Self::from_toml(&content, path)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the first configuration file found, or fall back to defaults.
    ///
    /// An explicit path must exist; the implicit locations are optional.
    pub async fn load_or_default(
        explicit: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match resolve_config_path(explicit) {
            Some(path) => {
                let config = Self::load(&path).await?;
                Ok((config, Some(path)))
            }
            None => {
                debug!("No configuration file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        fs::write(path, content)
            .await
            .map_err(|e| FileError::write_error(path.to_path_buf(), e))?;
        Ok(())
    }

    /// Reject values the packer or exporter cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validation::field_errors(self).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Set one value by dotted key, validating the result
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason,
        };

        let mut updated = self.clone();
        match key {
            "packing.capacity" => {
                updated.packing.capacity = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "extraction.data_dir" => updated.extraction.data_dir = PathBuf::from(value),
            "extraction.fallback_price" => updated.extraction.fallback_price = value.to_string(),
            "export.format" => {
                updated.export.format = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "export.output_file" => updated.export.output_file = PathBuf::from(value),
            "export.indent" => {
                updated.export.indent = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
