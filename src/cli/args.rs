use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigAction;
use crate::core::ExportFormat;

/// Main CLI structure for book-packer.
///
/// Reads saved product pages, extracts each book's metadata and packs the
/// books into shipping boxes that stay under a weight limit.
///
/// # Examples
///
/// ```bash
/// # Pack every page under ./data into boxes, writing data.json
/// book-packer pack
///
/// # Use 20 lb boxes and print a Markdown report
/// book-packer pack --capacity 20 --format markdown --stdout
///
/// # Only extract the book records
/// book-packer extract --data-dir pages
/// ```
#[derive(Parser)]
#[command(name = "book-packer")]
#[command(about = "Extract book data from product pages and pack the books into shipping boxes")]
#[command(version)]
pub struct Cli {
    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (default: ./.book-packer.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands for book-packer.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract books from product pages and pack them into boxes
    Pack {
        /// Directory of saved product pages
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Output file (default from config: data.json)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the result instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Maximum weight per box, in pounds
        #[arg(long)]
        capacity: Option<f64>,
    },

    /// Extract books from product pages without packing
    Extract {
        /// Directory of saved product pages
        #[arg(short, long)]
        data_dir: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },
}

// Argument structures for command handlers
pub struct PackArgs {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
    pub format: Option<ExportFormat>,
    pub capacity: Option<f64>,
}

pub struct ExtractArgs {
    pub config_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
}
