// Essay Engine
// Main entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use essay_engine::cli::{run, Cli};
use essay_engine::config::load_config;
use essay_engine::providers::{create_generator, null_generator};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay machine-readable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    let generator = if cli.offline {
        tracing::debug!("Offline mode; heuristics only");
        null_generator()
    } else {
        create_generator(&config.model)
    };

    run(&cli, &config, generator).await
}
