//! Status and document-type vocabularies.
//!
//! Statuses are stored as plain strings in the database; the valid sets are
//! small and fixed, so they live here as constant tables with validation
//! helpers instead of database enums.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Project statuses
// ---------------------------------------------------------------------------

/// Project is being planned; the default for new projects.
pub const PROJECT_PLANNING: &str = "planning";
/// Work on site is underway.
pub const PROJECT_ACTIVE: &str = "active";
/// Project is finished.
pub const PROJECT_COMPLETED: &str = "completed";

/// All valid project statuses.
pub const VALID_PROJECT_STATUSES: &[&str] =
    &[PROJECT_PLANNING, PROJECT_ACTIVE, PROJECT_COMPLETED];

// ---------------------------------------------------------------------------
// Milestone statuses
// ---------------------------------------------------------------------------

/// Milestone has not been completed yet; the default for new milestones.
pub const MILESTONE_PENDING: &str = "pending";
/// Milestone has been marked done by the user.
pub const MILESTONE_COMPLETED: &str = "completed";

/// All valid milestone statuses. The only transition is a user-triggered
/// toggle between the two; "overdue" is derived at display time and never
/// stored.
pub const VALID_MILESTONE_STATUSES: &[&str] = &[MILESTONE_PENDING, MILESTONE_COMPLETED];

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// Building permit application.
pub const DOC_PERMIT: &str = "permit";
/// Subcontractor agreement.
pub const DOC_CONTRACT: &str = "contract";
/// Safety log / hazard report.
pub const DOC_SAFETY: &str = "safety";
/// Formal proposal and cost estimate.
pub const DOC_BID: &str = "bid";

/// All valid generated document types.
pub const VALID_DOCUMENT_TYPES: &[&str] = &[DOC_PERMIT, DOC_CONTRACT, DOC_SAFETY, DOC_BID];

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that a project status is one of the known constants.
pub fn validate_project_status(status: &str) -> Result<(), CoreError> {
    validate_member(status, VALID_PROJECT_STATUSES, "project status")
}

/// Validate that a milestone status is one of the known constants.
pub fn validate_milestone_status(status: &str) -> Result<(), CoreError> {
    validate_member(status, VALID_MILESTONE_STATUSES, "milestone status")
}

/// Validate that a document type is one of the known constants.
pub fn validate_document_type(doc_type: &str) -> Result<(), CoreError> {
    validate_member(doc_type, VALID_DOCUMENT_TYPES, "document type")
}

fn validate_member(value: &str, valid: &[&str], what: &str) -> Result<(), CoreError> {
    if valid.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {what} '{value}'. Must be one of: {}",
            valid.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_statuses_valid() {
        assert!(validate_project_status("planning").is_ok());
        assert!(validate_project_status("active").is_ok());
        assert!(validate_project_status("completed").is_ok());
    }

    #[test]
    fn project_status_invalid() {
        assert!(validate_project_status("archived").is_err());
    }

    #[test]
    fn milestone_statuses_valid() {
        assert!(validate_milestone_status("pending").is_ok());
        assert!(validate_milestone_status("completed").is_ok());
    }

    #[test]
    fn milestone_status_invalid() {
        assert!(validate_milestone_status("overdue").is_err());
    }

    #[test]
    fn document_types_valid() {
        for t in VALID_DOCUMENT_TYPES {
            assert!(validate_document_type(t).is_ok());
        }
    }

    #[test]
    fn document_type_invalid() {
        assert!(validate_document_type("invoice").is_err());
    }

    #[test]
    fn error_message_lists_valid_values() {
        let err = validate_document_type("invoice").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("permit"));
        assert!(msg.contains("bid"));
    }
}
