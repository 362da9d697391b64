use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::cli::args::ExtractArgs;
use crate::cli::commands::Command;
use crate::export::ExportService;
use crate::security::validate_path;

use super::utils::{extract_books, load_config};

pub struct ExtractCommand {
    args: ExtractArgs,
}

impl ExtractCommand {
    pub fn new(args: ExtractArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ExtractCommand {
    async fn execute(&self) -> Result<()> {
        let config = load_config(self.args.config_path.as_deref()).await?;
        let books = extract_books(&config, self.args.data_dir.as_ref()).await?;

        let output_content =
            serde_json::to_string_pretty(&books).context("Failed to serialize books")?;

        if let Some(output_path) = &self.args.output {
            let validated_path = validate_path(output_path)?;
            ExportService::new()
                .write_output(&validated_path, &output_content)
                .await?;
            eprintln!("{} books exported to {}", books.len(), validated_path.display());
        } else {
            println!("{output_content}");
        }

        Ok(())
    }
}
