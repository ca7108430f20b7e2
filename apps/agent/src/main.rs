mod config;
mod jobs;

use anyhow::bail;
use config::Config;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "alerts".to_string());
    match mode.as_str() {
        "scrape" => jobs::run_scrape(&config).await,
        "alerts" => jobs::run_alerts(&config).await,
        other => bail!("unknown mode {:?} (expected \"scrape\" or \"alerts\")", other),
    }
}
