mod catalog;
mod config;
mod errors;
mod gaps;
mod matching;
mod models;
mod recommend;
mod routes;
mod scoring;
mod state;
mod strategy;
mod swapper;
mod unified;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Unified Skills API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data is validated once here; a bad seed aborts startup.
    let catalog = Catalog::builtin()?;
    info!(
        users = catalog.users().len(),
        categories = catalog.categories().len(),
        career_paths = catalog.career_paths().len(),
        roles = catalog.roles().len(),
        "Catalog loaded"
    );

    let state = AppState::new(catalog);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
