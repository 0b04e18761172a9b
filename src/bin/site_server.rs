// HTTP server for the EMPC site.
//
// Usage: cargo run --bin site_server
// Environment: PORT, BIND_ADDR, CACHE_TTL_SECS, CACHE_CAPACITY, WIDE_LAYOUT_MIN_PX

use empc_site::{create_router, AppState, SiteConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "empc_site=info,tower_http=debug,axum=debug,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CACHE_TTL: {:?}", config.cache_ttl);
    tracing::info!("  CACHE_CAPACITY: {}", config.cache_capacity);

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
