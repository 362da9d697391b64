use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::cli::commands::Command;
use crate::config::{local_config_file, ConfigAction, ConfigValidator, PackerConfig, CONFIG_KEYS};

use super::utils::load_config;

pub struct ConfigCommand {
    action: ConfigAction,
    config_path: Option<PathBuf>,
}

impl ConfigCommand {
    pub fn new(action: ConfigAction, config_path: Option<PathBuf>) -> Self {
        Self {
            action,
            config_path,
        }
    }

    /// File that `init` and `set` write to
    fn target_path(&self) -> Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => local_config_file(),
        }
    }
}

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(&self) -> Result<()> {
        match &self.action {
            ConfigAction::Init { force } => {
                let config_path = self.target_path()?;
                if config_path.exists() && !force {
                    bail!(
                        "Configuration already exists at {} (use --force to overwrite)",
                        config_path.display()
                    );
                }
                PackerConfig::default().save(&config_path).await?;
                println!("Configuration initialized at {}", config_path.display());
            }

            ConfigAction::Show => {
                let config = load_config(self.config_path.as_deref()).await?;
                print!("{}", config.to_toml()?);
            }

            ConfigAction::Set { key, value } => {
                let config_path = self.target_path()?;
                let mut config = if config_path.exists() {
                    PackerConfig::load(&config_path).await?
                } else {
                    PackerConfig::default()
                };

                config.set(key, value).with_context(|| {
                    format!("Failed to set {key} (supported keys: {})", CONFIG_KEYS.join(", "))
                })?;
                config.save(&config_path).await?;
                println!("Set {key} = {value} in {}", config_path.display());
            }

            ConfigAction::Validate => {
                let (config, source) = PackerConfig::load_or_default(self.config_path.as_deref())
                    .await
                    .context("Failed to load configuration")?;

                let validator = ConfigValidator::new(&config);
                let validator = match source.as_deref() {
                    Some(path) => validator.with_config_path(path),
                    None => validator,
                };
                let report = validator.validate();
                report.print_summary();

                if report.has_errors() {
                    bail!(
                        "Configuration validation failed with {} errors",
                        report.errors.len()
                    );
                }
            }
        }

        Ok(())
    }
}
