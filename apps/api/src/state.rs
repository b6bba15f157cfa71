use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only: each request packs into its own accumulator.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable document store. Default: PgResumeStore.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}
