//! Repository for the `projects` table.

use sqlx::PgPool;

use girder_core::status::PROJECT_PLANNING;
use girder_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, location, description, status, notes, \
                       due_date, budget, created_at, updated_at";

/// Provides owner-scoped CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `user_id`, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `planning`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, location, description, status, notes, due_date, budget)
             VALUES ($1, $2, $3, $4, COALESCE($5, '{PROJECT_PLANNING}'), $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(input.due_date)
            .bind(input.budget)
            .fetch_one(pool)
            .await
    }

    /// Find a project by id, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by primary key only, with NO ownership filter.
    ///
    /// Used exclusively by the document generation flow, which matches the
    /// original system's behaviour of loading the target project unscoped.
    pub async fn find_by_id_unscoped(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the owner's projects, most recently created first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the owner's not-yet-completed projects that have a due date,
    /// soonest first. Feeds the dashboard deadlines view.
    pub async fn list_upcoming_deadlines(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE user_id = $1 AND due_date IS NOT NULL AND status <> 'completed'
             ORDER BY due_date ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no project with the given `id`.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($3, name),
                location = COALESCE($4, location),
                description = COALESCE($5, description),
                status = COALESCE($6, status),
                notes = COALESCE($7, notes),
                due_date = COALESCE($8, due_date),
                budget = COALESCE($9, budget)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(input.due_date)
            .bind(input.budget)
            .fetch_optional(pool)
            .await
    }

    /// Set only the budget field. Returns `None` on an ownership miss.
    pub async fn update_budget(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        budget: f64,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET budget = $3
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(user_id)
            .bind(budget)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by id, scoped to its owner. Child milestones,
    /// expenses, and documents go with it via FK cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
