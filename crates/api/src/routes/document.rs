//! Route definitions for the `/documents` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::document;
use crate::state::AppState;

/// Routes mounted at `/documents`.
///
/// ```text
/// GET    /          -> list (with project names)
/// POST   /generate  -> generate
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/documents", get(document::list))
        .route("/documents/generate", post(document::generate))
        .route("/documents/{id}", delete(document::delete))
}
