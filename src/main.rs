use anyhow::{Context, Result};
use clap::Parser;
use peoplegpt_web::{start_web_server, ConfigManager, ConfigOverrides};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "peoplegpt_web=info,rocket=warn";

#[derive(Parser, Debug)]
#[command(name = "peoplegpt-web")]
#[command(about = "PeopleGPT recruiting web front end")]
struct Args {
    /// Base URL of the recruiting API
    #[arg(long)]
    backend_url: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    address: Option<String>,

    /// Configuration file (defaults to ./config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (plain, structured) = if json {
        (None, Some(fmt::layer().json().with_current_span(false)))
    } else {
        (Some(fmt::layer().with_target(false)), None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain)
        .with(structured)
        .try_init()
        .context("Failed to initialise logging")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json)?;

    let config = ConfigManager::load(ConfigOverrides {
        config_path: args.config,
        backend_url: args.backend_url,
        address: args.address,
        port: args.port,
    })?;

    info!("Environment: {}", config.environment);
    info!("Request timeout: {}s", config.timeout_seconds);

    start_web_server(config).await
}
