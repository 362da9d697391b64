use anyhow::Result;
use async_trait::async_trait;

pub mod config;
pub mod extract;
pub mod pack;

pub use config::ConfigCommand;
pub use extract::ExtractCommand;
pub use pack::PackCommand;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use anyhow::{Context, Result};
    use std::path::{Path, PathBuf};
    use tracing::info;

    use crate::config::PackerConfig;
    use crate::core::{Book, BookSource};
    use crate::extract::BookExtractor;
    use crate::security::validate_existing_dir;

    /// Load configuration, honouring an explicit `--config` path
    pub async fn load_config(config_path: Option<&Path>) -> Result<PackerConfig> {
        let (config, source) = PackerConfig::load_or_default(config_path)
            .await
            .context("Failed to load configuration")?;
        if let Some(path) = source {
            info!(path = %path.display(), "Using configuration file");
        }
        Ok(config)
    }

    /// Extract every book from the data directory named on the command line or in config
    pub async fn extract_books(
        config: &PackerConfig,
        data_dir: Option<&PathBuf>,
    ) -> Result<Vec<Book>> {
        let dir = data_dir.unwrap_or(&config.extraction.data_dir);
        let dir = validate_existing_dir(dir)
            .with_context(|| format!("Invalid data directory {}", dir.display()))?;

        let extractor = BookExtractor::new()?
            .with_fallback_price(config.extraction.fallback_price.clone());
        let books = extractor
            .extract_dir(&dir)
            .await
            .with_context(|| format!("Failed to extract books from {}", dir.display()))?;

        info!(count = books.len(), dir = %dir.display(), "Extracted books");
        Ok(books)
    }
}
