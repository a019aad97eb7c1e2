//! Request handlers, one module per resource.

pub mod dashboard;
pub mod document;
pub mod expense;
pub mod milestone;
pub mod project;
pub mod suggest;
