//! Handlers for generated documents, including the generation flow itself.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use girder_core::error::CoreError;
use girder_core::types::DbId;
use girder_db::models::document::{
    CreateDocument, Document, DocumentWithProject, GenerateDocumentRequest,
};
use girder_db::repositories::{DocumentRepo, ProjectRepo};
use girder_docgen::{render_pdf, ProjectFacts};

use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response for a successful generation.
///
/// The rendered PDF is not uploaded anywhere yet, so `url` is always the
/// placeholder `"#"`.
#[derive(Debug, Serialize)]
pub struct GenerateDocumentResponse {
    pub url: &'static str,
    pub message: &'static str,
    pub document_id: DbId,
}

/// POST /api/v1/documents/generate
///
/// Orchestrates the full flow: load the project, produce content through
/// the configured generator, render the watermarked PDF, and persist the
/// metadata row.
///
/// The project load is deliberately NOT scoped to the caller — this mirrors
/// the original system, which fetched the target project by primary key
/// only.
pub async fn generate(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<GenerateDocumentRequest>,
) -> AppResult<Json<GenerateDocumentResponse>> {
    input.validate()?;

    let project = ProjectRepo::find_by_id_unscoped(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;

    let facts = ProjectFacts {
        name: project.name.clone(),
        location: project.location.clone(),
    };
    let content = state.generator.generate(&facts, &input.doc_type).await;

    let title = input.title.unwrap_or_else(|| input.doc_type.clone());
    let pdf_bytes = render_pdf(&title, &content)?;
    tracing::debug!(
        doc_type = %input.doc_type,
        project_id = project.id,
        pdf_bytes = pdf_bytes.len(),
        "Rendered document PDF"
    );

    let document = DocumentRepo::create(
        &state.pool,
        &CreateDocument {
            project_id: project.id,
            user_id: user.user_id,
            doc_type: input.doc_type,
            title,
            content,
            pdf_url: None,
        },
    )
    .await?;

    Ok(Json(GenerateDocumentResponse {
        url: "#",
        message: "Generated",
        document_id: document.id,
    }))
}

/// GET /api/v1/documents
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<DocumentWithProject>>> {
    let documents = DocumentRepo::list_with_project(&state.pool, user.user_id).await?;
    Ok(Json(documents))
}

/// GET /api/v1/projects/{project_id}/documents
pub async fn list_by_project(
    State(state): State<AppState>,
    user: AuthUser,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = DocumentRepo::list_by_project(&state.pool, user.user_id, project_id).await?;
    Ok(Json(documents))
}

/// DELETE /api/v1/documents/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DocumentRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))
    }
}
