use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote generation backend; `None` runs the service in DB-truth mode.
    pub llm: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}
