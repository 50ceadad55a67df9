use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::Arc;

mod api;
mod breach;
mod cli;
mod core;
mod generators;
mod models;

use crate::api::AppState;
use crate::breach::{BreachChecker, HibpClient, RateLimiter};
use crate::cli::Args;
use crate::core::config::Config;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    let dotenv_loaded = Path::new(".env").exists() && dotenvy::dotenv().is_ok();

    let args = Args::parse();
    let mut config = Config::load();
    args.apply(&mut config);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    log::info!("🔒 Starting Secure Password Generator");
    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    let limiter = Arc::new(RateLimiter::new(
        config.breach_rate_limit_max,
        config.breach_rate_limit_window,
    ));
    log::info!(
        "Breach lookups limited to {} per {:?}",
        limiter.max_requests(),
        limiter.window()
    );
    let hibp = HibpClient::new(&config).map_err(|e| {
        log::error!("Failed to create breach API client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;
    let breach = BreachChecker::new(limiter, Arc::new(hibp), config.breach_timeout);

    api::start_server(AppState::new(breach), &config).await.map_err(|e| {
        log::error!("API server failed: {}", e);
        e
    })?;

    log::info!("✅ Password generator shutdown complete.");
    Ok(())
}
