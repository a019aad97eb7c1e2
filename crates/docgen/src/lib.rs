//! Girder document generation.
//!
//! Two halves: a [`ContentGenerator`] strategy that turns a project plus a
//! document type into plain text (hosted completion API or deterministic
//! template), and a PDF renderer that lays that text out on a single
//! watermarked page.

pub mod generator;
pub mod pdf;

pub use generator::{CompletionGenerator, ContentGenerator, ProjectFacts, TemplateGenerator};
pub use pdf::{render_pdf, PdfError};
