use std::sync::Arc;

use anyhow::Context;
use species_gateway::{
    config::Settings,
    routes,
    state::AppState,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = Settings::from_env().context("invalid configuration")?;
    if settings.chat_api_key.is_none() {
        warn!("CHAT_API_KEY is not set; askAssistant will return a configuration error");
    }

    let state = Arc::new(AppState::from_settings(&settings).context("failed to build HTTP client")?);
    spawn_cache_janitor(&state);

    let cors = CorsLayer::very_permissive();
    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    info!("species gateway listening on http://{}/graphql", settings.bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

// Expired entries are otherwise only evicted when the same key is read again.
fn spawn_cache_janitor(state: &AppState) {
    let cache = state.species_cache.clone();
    if !cache.is_enabled() {
        return;
    }

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(cache.ttl());
        loop {
            ticker.tick().await;
            let removed = cache.purge_expired();
            if removed > 0 {
                debug!(removed, "purged expired edge cache entries");
            }
        }
    });
}
