//! Dashboard widget handlers.

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use girder_core::types::DbId;
use girder_db::repositories::ProjectRepo;

use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::state::AppState;

/// One entry in the upcoming-deadlines widget.
#[derive(Debug, Serialize)]
pub struct DeadlineItem {
    pub id: DbId,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: String,
}

/// GET /api/v1/dashboard/deadlines
///
/// The owner's not-yet-completed projects that have a due date, soonest
/// first.
pub async fn deadlines(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<DeadlineItem>>> {
    let projects = ProjectRepo::list_upcoming_deadlines(&state.pool, user.user_id).await?;

    let items = projects
        .into_iter()
        .filter_map(|p| {
            p.due_date.map(|due_date| DeadlineItem {
                id: p.id,
                title: p.name,
                due_date,
                status: p.status,
            })
        })
        .collect();
    Ok(Json(items))
}
