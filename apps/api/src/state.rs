use std::sync::Arc;

use crate::analysis::engine::CareerEngine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only analysis engine. Regexes compiled once at startup, tables are static.
    pub engine: Arc<CareerEngine>,
}
