use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod config;
mod handlers;
mod router;
mod schemas;
mod test_utils;
mod tests;

use cli::Cli;

const DEFAULT_LOG_FILTER: &str = "asset_viewer=debug,catalog=info,tower_http=debug";

/// Load `.env` (the working directory's unless a path is given), then build
/// the log filter, so `RUST_LOG` may come from either place. Clap reads the
/// same environment afterwards.
fn load_env_filter(dotenv_path: Option<&Path>) -> EnvFilter {
    match dotenv_path {
        Some(path) => {
            dotenvy::from_path(path).ok();
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(load_env_filter(None))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
