use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::cli::args::PackArgs;
use crate::cli::commands::Command;
use crate::config::PackerConfig;
use crate::core::{GreedyPacker, PackingSummary};
use crate::export::ExportService;
use crate::security::validate_path;

use super::utils::{extract_books, load_config};

pub struct PackCommand {
    args: PackArgs,
}

impl PackCommand {
    pub fn new(args: PackArgs) -> Self {
        Self { args }
    }

    /// CLI flags take precedence over the configuration file
    fn apply_overrides(&self, mut config: PackerConfig) -> Result<PackerConfig> {
        if let Some(capacity) = self.args.capacity {
            config.packing.capacity = capacity;
        }
        if let Some(format) = self.args.format {
            config.export.format = format;
        }
        if let Some(output) = &self.args.output {
            config.export.output_file = output.clone();
        }
        config.validate().context("Invalid command line options")?;
        Ok(config)
    }
}

#[async_trait]
impl Command for PackCommand {
    async fn execute(&self) -> Result<()> {
        let config = load_config(self.args.config_path.as_deref()).await?;
        let config = self.apply_overrides(config)?;

        let books = extract_books(&config, self.args.data_dir.as_ref()).await?;

        let packer = GreedyPacker::new(config.packing.capacity);
        let boxes = packer.pack(&books).map_err(|err| {
            let message = match err.offending_index().and_then(|i| books.get(i)) {
                Some(book) => format!("Cannot pack \"{}\" by {}", book.title, book.author),
                None => format!("Cannot pack books into {} lb boxes", config.packing.capacity),
            };
            anyhow::Error::new(err).context(message)
        })?;

        let export_service = ExportService::with_indent(config.export.indent);
        let output_content = export_service.export(&boxes, config.export.format)?;

        if self.args.stdout {
            print!("{output_content}");
            return Ok(());
        }

        let output_path = validate_path(&config.export.output_file)?;
        export_service
            .write_output(&output_path, &output_content)
            .await?;

        let summary = PackingSummary::from_containers(&boxes);
        info!(path = %output_path.display(), "Wrote packing result");
        eprintln!(
            "Packed {} books into {} boxes, exported to {}",
            summary.item_count,
            summary.container_count,
            output_path.display()
        );

        Ok(())
    }
}
