//! calcsuite - multi-function calculator service

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use calcsuite::api::{create_router, AppState};
use calcsuite::config::Args;
use calcsuite::core::history::MemStorage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("calcsuite={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("======================================");
    info!("  calcsuite - calculator service");
    info!("======================================");
    info!("Listen: {}", args.listen);
    info!("Static dir: {}", args.static_dir);
    info!("======================================");

    let state = AppState {
        storage: Arc::new(MemStorage::new()),
    };
    let app = create_router(state, &args.static_dir);

    let listener = tokio::net::TcpListener::bind(args.listen).await?;
    info!("Listening on {}", args.listen);
    axum::serve(listener, app).await?;

    Ok(())
}
