//! Route definitions for the `/projects` resource.
//!
//! Also nests milestone, timeline, expense, and document listings under
//! `/projects/{project_id}/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{document, expense, milestone, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                            -> list
/// POST   /                            -> create
/// GET    /{id}                        -> get_by_id
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// PUT    /{id}/budget                 -> update_budget
///
/// GET    /{project_id}/milestones     -> list_by_project
/// POST   /{project_id}/milestones     -> create
/// GET    /{project_id}/timeline       -> timeline
/// GET    /{project_id}/expenses       -> list_by_project
/// POST   /{project_id}/expenses       -> create
/// GET    /{project_id}/documents      -> list_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list).post(project::create))
        .route(
            "/projects/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/projects/{id}/budget", put(project::update_budget))
        .route(
            "/projects/{project_id}/milestones",
            get(milestone::list_by_project).post(milestone::create),
        )
        .route("/projects/{project_id}/timeline", get(milestone::timeline))
        .route(
            "/projects/{project_id}/expenses",
            get(expense::list_by_project).post(expense::create),
        )
        .route(
            "/projects/{project_id}/documents",
            get(document::list_by_project),
        )
}
