use std::sync::Arc;

use crate::config::Config;
use crate::scoring::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable resume scorer. Default: RuleBasedScorer. Swap via SCORER_BACKEND env.
    pub scorer: Arc<dyn ResumeScorer>,
}
