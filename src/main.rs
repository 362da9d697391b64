use anyhow::Result;
use book_packer::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
