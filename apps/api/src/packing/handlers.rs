//! Axum route handlers for the pack solver.

use axum::{body::Bytes, extract::State, Json};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::packing::models::SolveRequest;
use crate::packing::solver::{solve, PackSolution};
use crate::packing::validation::validate_solve_request;
use crate::state::AppState;

/// POST /api/v1/packs/solve (also mounted at POST /)
///
/// Validates the catalog and order, then returns pack size → count for the
/// cheapest covering combination.
pub async fn handle_solve(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PackSolution>, AppError> {
    // Content-Type is not checked; only the body has to decode.
    let request = SolveRequest::from_json(&body).map_err(|e| {
        debug!("Rejected solve payload: {e}");
        AppError::InvalidJson
    })?;

    let input = validate_solve_request(&request, state.config.max_search_bound).map_err(|e| {
        debug!("Rejected solve request: {e}");
        e
    })?;

    let order = input.order;
    let catalog_size = input.catalog.len();

    // CPU-bound; keep it off the async executor.
    let solution = tokio::task::spawn_blocking(move || solve(&input.catalog, input.order))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in solve: {e}")))??;

    info!(
        order,
        catalog_size,
        total_items = solution.total_items(),
        total_packs = solution.total_packs(),
        "Solved pack order"
    );

    Ok(Json(solution))
}

/// Any non-POST method on a solve route.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
