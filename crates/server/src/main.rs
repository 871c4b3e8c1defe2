use std::sync::Arc;

use anyhow::Context;
use moviemate_metadata::omdb::OmdbClient;
use moviemate_metadata::provider::MovieProvider;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Credential is read once here and injected into the client; the
    // process still serves without it, each provider call failing fast.
    let api_key = std::env::var("OMDB_API_KEY").ok();
    if api_key.as_deref().unwrap_or("").is_empty() {
        warn!("OMDB_API_KEY not set; provider requests will fail until it is configured");
    }

    let provider: Arc<dyn MovieProvider> = Arc::new(OmdbClient::new(api_key));

    let state = moviemate_server::state::AppState { provider };
    let app = moviemate_server::routes::build_router(state);

    let bind_addr = std::env::var("MOVIEMATE_BIND").unwrap_or_else(|_| "0.0.0.0:8097".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .context("failed to bind")?;
    info!(addr = %bind_addr, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
