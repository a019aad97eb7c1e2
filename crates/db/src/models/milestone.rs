//! Milestone entity model and DTOs.
//!
//! Milestones carry calendar dates, not timestamps: the timeline's overdue
//! and duration rules are whole-day computations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use girder_core::status::validate_milestone_status;
use girder_core::types::{DbId, Timestamp};

/// A milestone row from the `project_milestones` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new milestone. Status always starts as `pending`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMilestone {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// DTO for the status route. The value is validated against the two-state
/// vocabulary; the toggle itself is client-driven.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMilestoneStatus {
    #[validate(custom(function = milestone_status))]
    pub status: String,
}

/// DTO for rescheduling a milestone.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMilestoneDates {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn milestone_status(status: &str) -> Result<(), ValidationError> {
    validate_milestone_status(status).map_err(|_| {
        let mut err = ValidationError::new("milestone_status");
        err.message = Some("Invalid status".into());
        err
    })
}
