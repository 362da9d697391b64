pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ExtractArgs, PackArgs};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::{Command, ConfigCommand, ExtractCommand, PackCommand};

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Pack {
            data_dir,
            output,
            stdout,
            format,
            capacity,
        } => {
            PackCommand::new(PackArgs {
                config_path: cli.config,
                data_dir,
                output,
                stdout,
                format,
                capacity,
            })
            .execute()
            .await?;
        }

        Commands::Extract { data_dir, output } => {
            ExtractCommand::new(ExtractArgs {
                config_path: cli.config,
                data_dir,
                output,
            })
            .execute()
            .await?;
        }

        Commands::Config { action } => {
            ConfigCommand::new(action, cli.config).execute().await?;
        }
    }

    Ok(())
}

/// Logs go to stderr so exported data on stdout stays clean. `RUST_LOG`
/// overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("book_packer={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
