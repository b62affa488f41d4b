pub mod health;

use axum::{
    http::{header, Method, Uri},
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::Config;
use crate::errors::AppError;
use crate::packing::handlers;
use crate::state::AppState;

fn solve_route() -> MethodRouter<AppState> {
    post(handlers::handle_solve).fallback(handlers::handle_method_not_allowed)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Cross-origin access is limited to the configured browser origin.
fn cors_layer(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.allowed_origin.clone()]))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health::health_handler))
        // The browser client posts to the server root.
        .route("/", solve_route())
        .route("/api/v1/packs/solve", solve_route())
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
}
