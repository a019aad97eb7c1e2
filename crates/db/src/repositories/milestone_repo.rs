//! Repository for the `project_milestones` table.
//!
//! Milestones have no `user_id` column of their own; every statement scopes
//! through the parent project's owner.

use sqlx::PgPool;

use girder_core::status::MILESTONE_PENDING;
use girder_core::types::DbId;

use crate::models::milestone::{CreateMilestone, Milestone};

/// Column list shared across queries (qualified for joined statements).
const COLUMNS: &str = "m.id, m.project_id, m.title, m.start_date, m.end_date, \
                       m.status, m.created_at";

/// Provides owner-scoped CRUD operations for milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a new milestone with status `pending`.
    ///
    /// The insert selects through `projects` so it only succeeds when the
    /// parent project exists and belongs to `user_id`; returns `None`
    /// otherwise.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
        input: &CreateMilestone,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_milestones (project_id, title, start_date, end_date, status)
             SELECT p.id, $3, $4, $5, '{MILESTONE_PENDING}'
             FROM projects p WHERE p.id = $1 AND p.user_id = $2
             RETURNING id, project_id, title, start_date, end_date, status, created_at"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// List a project's milestones ordered by start date ascending — the
    /// order the timeline classification expects.
    pub async fn list_by_project(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_milestones m
             JOIN projects p ON p.id = m.project_id
             WHERE m.project_id = $1 AND p.user_id = $2
             ORDER BY m.start_date ASC"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one milestone, scoped to the project owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_milestones m
             JOIN projects p ON p.id = m.project_id
             WHERE m.id = $1 AND p.user_id = $2"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Set a milestone's status. Returns `None` on an ownership miss.
    pub async fn update_status(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        status: &str,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = "UPDATE project_milestones m SET status = $3
             FROM projects p
             WHERE m.id = $1 AND p.id = m.project_id AND p.user_id = $2
             RETURNING m.id, m.project_id, m.title, m.start_date, m.end_date, m.status, m.created_at";
        sqlx::query_as::<_, Milestone>(query)
            .bind(id)
            .bind(user_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Reschedule a milestone's start/end dates. Returns `None` on an
    /// ownership miss.
    pub async fn update_dates(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = "UPDATE project_milestones m SET start_date = $3, end_date = $4
             FROM projects p
             WHERE m.id = $1 AND p.id = m.project_id AND p.user_id = $2
             RETURNING m.id, m.project_id, m.title, m.start_date, m.end_date, m.status, m.created_at";
        sqlx::query_as::<_, Milestone>(query)
            .bind(id)
            .bind(user_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a milestone. Returns the deleted row (for its project scope)
    /// or `None` on an ownership miss.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = "DELETE FROM project_milestones m
             USING projects p
             WHERE m.id = $1 AND p.id = m.project_id AND p.user_id = $2
             RETURNING m.id, m.project_id, m.title, m.start_date, m.end_date, m.status, m.created_at";
        sqlx::query_as::<_, Milestone>(query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
