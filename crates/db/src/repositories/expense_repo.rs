//! Repository for the `project_expenses` table.
//!
//! Scoped through the parent project's owner, like milestones.

use sqlx::PgPool;

use girder_core::types::DbId;

use crate::models::expense::{CreateExpense, Expense, UpdateExpense};

const COLUMNS: &str = "e.id, e.project_id, e.description, e.amount, e.category, \
                       e.date, e.created_at";

/// Provides owner-scoped CRUD operations for expenses.
pub struct ExpenseRepo;

impl ExpenseRepo {
    /// Record a new expense against an owned project, or `None` when the
    /// project does not exist or belongs to someone else.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
        input: &CreateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = "INSERT INTO project_expenses (project_id, description, amount, category, date)
             SELECT p.id, $3, $4, $5, $6
             FROM projects p WHERE p.id = $1 AND p.user_id = $2
             RETURNING id, project_id, description, amount, category, date, created_at";
        sqlx::query_as::<_, Expense>(query)
            .bind(project_id)
            .bind(user_id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// List a project's expenses, most recent date first.
    pub async fn list_by_project(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<Vec<Expense>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_expenses e
             JOIN projects p ON p.id = e.project_id
             WHERE e.project_id = $1 AND p.user_id = $2
             ORDER BY e.date DESC"
        );
        sqlx::query_as::<_, Expense>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an expense. Only non-`None` fields are applied. Returns `None`
    /// on an ownership miss.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateExpense,
    ) -> Result<Option<Expense>, sqlx::Error> {
        let query = "UPDATE project_expenses e SET
                description = COALESCE($3, e.description),
                amount = COALESCE($4, e.amount),
                category = COALESCE($5, e.category),
                date = COALESCE($6, e.date)
             FROM projects p
             WHERE e.id = $1 AND p.id = e.project_id AND p.user_id = $2
             RETURNING e.id, e.project_id, e.description, e.amount, e.category, e.date, e.created_at";
        sqlx::query_as::<_, Expense>(query)
            .bind(id)
            .bind(user_id)
            .bind(&input.description)
            .bind(input.amount)
            .bind(&input.category)
            .bind(input.date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an expense. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM project_expenses e
             USING projects p
             WHERE e.id = $1 AND p.id = e.project_id AND p.user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
