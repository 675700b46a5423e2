use std::path::PathBuf;

use clap::Parser;

use mock_external::config::{load_config, ConfigOverrides, LogFormat};
use mock_external::observability::logging;

#[derive(Parser)]
#[command(name = "mock-external")]
#[command(about = "Mock doctor-calendar, room-reservation and email-notification endpoints", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port; overrides `PORT` and the config file.
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind.
    #[arg(long)]
    host: Option<String>,

    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        port: cli.port,
        host: cli.host,
        log_format: cli.log_format,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;

    logging::init(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address(),
        "mock-external starting"
    );

    mock_external::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
