pub mod dashboard;
pub mod document;
pub mod expense;
pub mod health;
pub mod milestone;
pub mod project;

use axum::routing::{any, post};
use axum::Router;

use crate::handlers::suggest;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                    change-feed WebSocket
///
/// /projects                              list, create
/// /projects/{id}                         get, update, delete
/// /projects/{id}/budget                  set budget (PUT)
/// /projects/{project_id}/milestones      list, create
/// /projects/{project_id}/timeline        derived timeline (GET)
/// /projects/{project_id}/expenses        list, create
/// /projects/{project_id}/documents       list (GET)
///
/// /milestones/{id}/status                set status (PUT)
/// /milestones/{id}/dates                 reschedule (PUT)
/// /milestones/{id}                       delete
/// /milestones/suggest                    static suggestion stub (POST)
///
/// /expenses/{id}                         update, delete
///
/// /documents                             list (GET)
/// /documents/generate                    generation flow (POST)
/// /documents/{id}                        delete
///
/// /dashboard/deadlines                   upcoming deadlines (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", any(ws::ws_handler))
        .merge(project::router())
        .merge(milestone::router())
        .merge(expense::router())
        .merge(document::router())
        .merge(dashboard::router())
        .route("/milestones/suggest", post(suggest::suggest))
}
