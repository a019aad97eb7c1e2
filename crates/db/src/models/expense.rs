//! Expense entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use girder_core::types::{DbId, Timestamp};

/// An expense row from the `project_expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: Timestamp,
}

/// DTO for recording a new expense. Amounts carry no currency validation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExpense {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub amount: f64,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub date: NaiveDate,
}

/// DTO for updating an expense. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExpense {
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}
