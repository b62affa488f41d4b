use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The solver itself is stateless; handlers only read limits from config.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
