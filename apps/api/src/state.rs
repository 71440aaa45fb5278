use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Extraction backend. `GeminiClient` in production, a stub in tests.
    pub llm: Arc<dyn LlmBackend>,
    pub config: Config,
}
