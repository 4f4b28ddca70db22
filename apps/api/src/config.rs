use anyhow::{bail, Context, Result};

/// Which scorer implementation backs the `/score` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerBackend {
    /// Deterministic rule-based evaluator (default).
    Rules,
    /// LLM-backed evaluator. Requires ANTHROPIC_API_KEY.
    Llm,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scorer_backend: ScorerBackend,
    /// Only required when `scorer_backend` is `Llm`.
    pub anthropic_api_key: Option<String>,
    /// Upload size cap for resume files, in bytes.
    pub max_upload_bytes: usize,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scorer_backend = parse_scorer_backend(
            &std::env::var("SCORER_BACKEND").unwrap_or_else(|_| "rules".to_string()),
        )?;
        let anthropic_api_key =
            resolve_api_key(scorer_backend, std::env::var("ANTHROPIC_API_KEY").ok())?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scorer_backend,
            anthropic_api_key,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

fn parse_scorer_backend(raw: &str) -> Result<ScorerBackend> {
    match raw {
        "rules" => Ok(ScorerBackend::Rules),
        "llm" => Ok(ScorerBackend::Llm),
        other => bail!("SCORER_BACKEND must be 'rules' or 'llm', got '{other}'"),
    }
}

/// The llm backend cannot run without a key; fail at startup, not on the
/// first request.
fn resolve_api_key(
    backend: ScorerBackend,
    api_key: Option<String>,
) -> Result<Option<String>> {
    if backend == ScorerBackend::Llm && api_key.is_none() {
        bail!("SCORER_BACKEND=llm requires ANTHROPIC_API_KEY to be set");
    }
    Ok(api_key)
}
