//! Boundary checks run before the solver sees a request.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. order > 0
//! 2. at least one pack size
//! 3. every pack size > 0 (the first offending index is reported)
//! 4. the search bound stays under the configured ceiling

use crate::errors::AppError;
use crate::packing::models::{SolveInput, SolveRequest};
use crate::packing::solver::search_bound;

pub fn validate_solve_request(
    request: &SolveRequest,
    max_search_bound: usize,
) -> Result<SolveInput, AppError> {
    if request.order <= 0 {
        return Err(AppError::Validation(
            "Order must be greater than 0".to_string(),
        ));
    }
    let order = usize::try_from(request.order).map_err(|_| {
        AppError::UnprocessableEntity(format!("Order {} is too large", request.order))
    })?;

    if request.packs.is_empty() {
        return Err(AppError::Validation(
            "At least one pack size must be provided".to_string(),
        ));
    }

    let mut catalog = Vec::with_capacity(request.packs.len());
    for (index, &pack) in request.packs.iter().enumerate() {
        if pack <= 0 {
            return Err(AppError::Validation(format!(
                "Pack size at index {index} must be greater than 0"
            )));
        }
        let pack = usize::try_from(pack).map_err(|_| {
            AppError::UnprocessableEntity(format!("Pack size at index {index} is too large"))
        })?;
        catalog.push(pack);
    }

    let min_pack = catalog.iter().copied().min().unwrap_or(1);
    if search_bound(min_pack, order) > max_search_bound {
        return Err(AppError::UnprocessableEntity(format!(
            "Order {order} with smallest pack {min_pack} exceeds the search limit of {max_search_bound}"
        )));
    }

    Ok(SolveInput { catalog, order })
}
