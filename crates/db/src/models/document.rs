//! Generated document metadata model.
//!
//! Document content is immutable once generated; rows are only ever
//! inserted by the generation flow or deleted by their owner.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use girder_core::status::validate_document_type;
use girder_core::types::{DbId, Timestamp};

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub doc_type: String,
    pub title: String,
    pub content: String,
    pub pdf_url: Option<String>,
    pub created_at: Timestamp,
}

/// A document row joined with its project's name, for the documents list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentWithProject {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub doc_type: String,
    pub title: String,
    pub content: String,
    pub pdf_url: Option<String>,
    pub created_at: Timestamp,
    pub project_name: String,
}

/// Insert payload assembled by the generation flow (never deserialized from
/// a client directly).
#[derive(Debug, Clone)]
pub struct CreateDocument {
    pub project_id: DbId,
    pub user_id: DbId,
    pub doc_type: String,
    pub title: String,
    pub content: String,
    pub pdf_url: Option<String>,
}

/// Client request to the generation endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateDocumentRequest {
    pub project_id: DbId,
    #[validate(custom(function = document_type))]
    pub doc_type: String,
    /// Defaults to the document type when omitted.
    pub title: Option<String>,
}

fn document_type(doc_type: &str) -> Result<(), ValidationError> {
    validate_document_type(doc_type).map_err(|_| {
        let mut err = ValidationError::new("document_type");
        err.message = Some("Invalid document type".into());
        err
    })
}
