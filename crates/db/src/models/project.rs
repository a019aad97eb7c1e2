//! Project entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use girder_core::status::validate_project_status;
use girder_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub budget: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Defaults to `planning` if omitted.
    #[validate(custom(function = project_status))]
    pub status: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub budget: Option<f64>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = project_status))]
    pub status: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub budget: Option<f64>,
}

/// DTO for the budget-only update route.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectBudget {
    pub budget: f64,
}

fn project_status(status: &str) -> Result<(), ValidationError> {
    validate_project_status(status).map_err(|_| {
        let mut err = ValidationError::new("project_status");
        err.message = Some("Invalid status".into());
        err
    })
}
