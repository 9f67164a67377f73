use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillboard_api::config::Config;
use skillboard_api::db::create_pool;
use skillboard_api::matching::aliases;
use skillboard_api::routes::build_router;
use skillboard_api::state::AppState;
use skillboard_api::store::postgres::{PgJobCatalog, PgProfileStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillboard API v{}", env!("CARGO_PKG_VERSION"));

    // Build the alias table now so an invalid table aborts startup
    let aliases = aliases::builtin();
    info!("Skill alias table loaded ({} families)", aliases.len());

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    let state = AppState {
        config: config.clone(),
        profiles: Arc::new(PgProfileStore::new(db.clone())),
        jobs: Arc::new(PgJobCatalog::new(db)),
        aliases,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
