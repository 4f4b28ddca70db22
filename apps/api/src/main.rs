mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ScorerBackend};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::llm::LlmScorer;
use crate::scoring::{ResumeScorer, RuleBasedScorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Score API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize scorer (RuleBasedScorer by default — swap via SCORER_BACKEND)
    let scorer: Arc<dyn ResumeScorer> = match config.scorer_backend {
        ScorerBackend::Rules => Arc::new(RuleBasedScorer),
        ScorerBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required for the llm backend")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmScorer::new(LlmClient::new(api_key)))
        }
    };
    info!("Scorer backend: {}", scorer.backend());

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
