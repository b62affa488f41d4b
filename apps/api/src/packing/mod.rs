// Pack optimization: boundary validation, the DP solver, and the solve endpoint.
// The solver is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod handlers;
pub mod models;
pub mod solver;
pub mod validation;
