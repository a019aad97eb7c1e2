//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method also takes
//! the owning `user_id` and scopes its statement to it; child entities
//! (milestones, expenses) scope through a join to `projects`.

pub mod document_repo;
pub mod expense_repo;
pub mod milestone_repo;
pub mod project_repo;

pub use document_repo::DocumentRepo;
pub use expense_repo::ExpenseRepo;
pub use milestone_repo::MilestoneRepo;
pub use project_repo::ProjectRepo;
