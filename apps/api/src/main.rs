mod advisor;
mod config;
mod errors;
mod llm_client;
mod resume;
mod routes;
mod snapshots;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config.clone())?;
    match &state.llm {
        Some(llm) => info!(
            "LLM client initialized (advisor model: {}, resume parser model: {})",
            llm.model(),
            config.resume_parser_model
        ),
        None => warn!("GEMINI_API_KEY not set; running on rule-based and mock generators"),
    }
    if !state.resumes.has_remote() {
        info!("Resume structuring runs on rule-based extraction only");
    }
    if let Some(dir) = &config.output_dir {
        info!("Writing result snapshots to {}", dir.display());
    }

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
