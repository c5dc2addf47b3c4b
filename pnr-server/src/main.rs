use std::net::SocketAddr;
use std::time::Duration;

use pnr_server::parser::ParserConfig;
use pnr_server::reference::{ReferenceConfig, ReferenceStore};
use pnr_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Reference tables location and refresh cadence
    let mut reference_config = match std::env::var("DATA_DIR") {
        Ok(dir) => ReferenceConfig::new(dir),
        Err(_) => ReferenceConfig::default(),
    };
    if let Ok(secs) = std::env::var("REFERENCE_REFRESH_SECS") {
        match secs.parse::<u64>() {
            Ok(secs) if secs > 0 => {
                reference_config = reference_config.with_refresh_interval(Duration::from_secs(secs))
            }
            _ => warn!(value = %secs, "ignoring invalid REFERENCE_REFRESH_SECS"),
        }
    }

    // Load reference tables (fail fast if a present file is malformed)
    info!(data_dir = %reference_config.data_dir.display(), "loading reference tables");
    let references = ReferenceStore::load(reference_config)?;
    info!(
        entries = references.snapshot().await.len(),
        "loaded reference tables"
    );

    // Spawn background task to reload the tables periodically
    let references_refresh = references.clone();
    let refresh_interval = references.config().refresh_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match references_refresh.refresh().await {
                Ok(count) => info!(entries = count, "refreshed reference tables"),
                Err(e) => warn!(error = %e, "failed to refresh reference tables, keeping previous"),
            }
        }
    });

    let state = AppState::new(references, ParserConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    info!("PNR converter listening on http://{addr}");
    info!("  GET  /health       - Health check");
    info!("  POST /api/convert  - Convert PNR text to an itinerary");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
