use std::sync::Arc;

use crate::config::Config;
use crate::positions::PositionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Position definitions. The scoring engine only ever receives clones.
    pub positions: Arc<PositionStore>,
}
