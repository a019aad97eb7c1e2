//! Repository for the `documents` table.
//!
//! Documents are insert-only from the generation flow; there is no update
//! path because generated content is immutable.

use sqlx::PgPool;

use girder_core::types::DbId;

use crate::models::document::{CreateDocument, Document, DocumentWithProject};

const COLUMNS: &str = "id, project_id, user_id, doc_type, title, content, pdf_url, created_at";

/// Provides insert/list/delete operations for generated documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert the metadata row for a freshly generated document.
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, user_id, doc_type, title, content, pdf_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.project_id)
            .bind(input.user_id)
            .bind(&input.doc_type)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.pdf_url)
            .fetch_one(pool)
            .await
    }

    /// List the owner's documents with their project names, newest first.
    pub async fn list_with_project(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DocumentWithProject>, sqlx::Error> {
        let query = "SELECT d.id, d.project_id, d.user_id, d.doc_type, d.title, d.content,
                    d.pdf_url, d.created_at, p.name AS project_name
             FROM documents d
             JOIN projects p ON p.id = d.project_id
             WHERE d.user_id = $1
             ORDER BY d.created_at DESC";
        sqlx::query_as::<_, DocumentWithProject>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a single project's documents for its owner, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents
             WHERE project_id = $1 AND user_id = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(project_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document by id, scoped to its owner. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
