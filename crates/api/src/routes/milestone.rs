//! Route definitions for milestone mutations addressed by milestone id.
//!
//! Listing and creation live under `/projects/{project_id}/milestones`;
//! see [`crate::routes::project`].

use axum::routing::{delete, put};
use axum::Router;

use crate::handlers::milestone;
use crate::state::AppState;

/// Routes mounted at `/milestones`.
///
/// ```text
/// PUT    /{id}/status -> update_status
/// PUT    /{id}/dates  -> update_dates
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/milestones/{id}/status", put(milestone::update_status))
        .route("/milestones/{id}/dates", put(milestone::update_dates))
        .route("/milestones/{id}", delete(milestone::delete))
}
