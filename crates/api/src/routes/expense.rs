//! Route definitions for expense mutations addressed by expense id.

use axum::routing::put;
use axum::Router;

use crate::handlers::expense;
use crate::state::AppState;

/// Routes mounted at `/expenses`.
///
/// ```text
/// PUT    /{id} -> update
/// DELETE /{id} -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/expenses/{id}",
        put(expense::update).delete(expense::delete),
    )
}
