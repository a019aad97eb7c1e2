//! Handlers for milestones and the derived timeline view.
//!
//! Every mutation publishes a project-scoped change event so open timeline
//! views can re-fetch.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use girder_core::error::CoreError;
use girder_core::timeline::{classify, duration_days, TimelineEntry};
use girder_core::types::DbId;
use girder_db::models::milestone::{
    CreateMilestone, Milestone, UpdateMilestoneDates, UpdateMilestoneStatus,
};
use girder_db::repositories::MilestoneRepo;
use girder_events::ChangeEvent;

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/milestones
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateMilestone>,
) -> AppResult<(StatusCode, Json<Milestone>)> {
    input.validate()?;
    let milestone = MilestoneRepo::create(&state.pool, user.user_id, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    state.event_bus.publish(
        ChangeEvent::new("milestone.created", project_id)
            .with_entity(milestone.id)
            .with_actor(user.user_id),
    );
    Ok((StatusCode::CREATED, Json(milestone)))
}

/// GET /api/v1/projects/{project_id}/milestones
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Milestone>>> {
    let milestones = MilestoneRepo::list_by_project(&state.pool, user.user_id, project_id).await?;
    Ok(Json(milestones))
}

/// One milestone as shown on the timeline: the stored row plus its derived
/// display state and inclusive duration.
#[derive(Debug, Serialize)]
pub struct TimelineItem {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub state: &'static str,
    pub duration_days: i64,
}

/// GET /api/v1/projects/{project_id}/timeline
///
/// The milestone list in start-date order, classified against today.
pub async fn timeline(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<TimelineItem>>>> {
    let milestones = MilestoneRepo::list_by_project(&state.pool, user.user_id, project_id).await?;

    let entries: Vec<TimelineEntry> = milestones
        .iter()
        .map(|m| TimelineEntry {
            status: m.status.clone(),
            start_date: m.start_date,
            end_date: m.end_date,
        })
        .collect();
    let today = chrono::Utc::now().date_naive();
    let states = classify(&entries, today);

    let items = milestones
        .into_iter()
        .zip(states)
        .map(|(milestone, state)| TimelineItem {
            duration_days: duration_days(milestone.start_date, milestone.end_date),
            state: state.as_str(),
            milestone,
        })
        .collect();
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/milestones/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMilestoneStatus>,
) -> AppResult<Json<Milestone>> {
    input.validate()?;
    let milestone = MilestoneRepo::update_status(&state.pool, user.user_id, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;

    state.event_bus.publish(
        ChangeEvent::new("milestone.updated", milestone.project_id)
            .with_entity(milestone.id)
            .with_actor(user.user_id),
    );
    Ok(Json(milestone))
}

/// PUT /api/v1/milestones/{id}/dates
pub async fn update_dates(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMilestoneDates>,
) -> AppResult<Json<Milestone>> {
    let milestone = MilestoneRepo::update_dates(
        &state.pool,
        user.user_id,
        id,
        input.start_date,
        input.end_date,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Milestone",
        id,
    }))?;

    state.event_bus.publish(
        ChangeEvent::new("milestone.updated", milestone.project_id)
            .with_entity(milestone.id)
            .with_actor(user.user_id),
    );
    Ok(Json(milestone))
}

/// DELETE /api/v1/milestones/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let milestone = MilestoneRepo::delete(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;

    state.event_bus.publish(
        ChangeEvent::new("milestone.deleted", milestone.project_id)
            .with_entity(milestone.id)
            .with_actor(user.user_id),
    );
    Ok(StatusCode::NO_CONTENT)
}
