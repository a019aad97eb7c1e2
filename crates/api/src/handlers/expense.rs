//! Handlers for project expenses.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use girder_core::error::CoreError;
use girder_core::types::DbId;
use girder_db::models::expense::{CreateExpense, Expense, UpdateExpense};
use girder_db::repositories::ExpenseRepo;

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/expenses
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateExpense>,
) -> AppResult<(StatusCode, Json<Expense>)> {
    input.validate()?;
    let expense = ExpenseRepo::create(&state.pool, user.user_id, project_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /api/v1/projects/{project_id}/expenses
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Expense>>> {
    let expenses = ExpenseRepo::list_by_project(&state.pool, user.user_id, project_id).await?;
    Ok(Json(expenses))
}

/// PUT /api/v1/expenses/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExpense>,
) -> AppResult<Json<Expense>> {
    input.validate()?;
    let expense = ExpenseRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))?;
    Ok(Json(expense))
}

/// DELETE /api/v1/expenses/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExpenseRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Expense",
            id,
        }))
    }
}
