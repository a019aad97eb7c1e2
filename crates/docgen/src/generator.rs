//! Content generation strategies.
//!
//! [`ContentGenerator`] is the single seam between the generation flow and
//! however document text is actually produced. Two implementations exist
//! and exactly one is selected at startup from configuration:
//!
//! - [`CompletionGenerator`] — one blocking request to a hosted
//!   chat-completion API.
//! - [`TemplateGenerator`] — a deterministic mock used whenever no
//!   credential is configured.
//!
//! Both always yield text: a failed or empty completion substitutes a
//! literal fallback string rather than failing the request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The project fields document generation interpolates.
#[derive(Debug, Clone)]
pub struct ProjectFacts {
    pub name: String,
    pub location: Option<String>,
}

impl ProjectFacts {
    fn location_str(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }
}

/// Strategy interface: produce document body text for a project.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, project: &ProjectFacts, doc_type: &str) -> String;
}

// ---------------------------------------------------------------------------
// Hosted completion
// ---------------------------------------------------------------------------

/// Fixed system instruction sent with every completion request.
const SYSTEM_PROMPT: &str = "You are a legal document assistant for construction. \
     Generate a professional document content based on the type provided.";

/// Substituted when the completion call fails or returns nothing.
const FALLBACK_CONTENT: &str = "Content generation failed.";

/// Generates content through an OpenAI-style `/chat/completions` endpoint.
///
/// Holds the connection configuration for the hosted API; one synchronous
/// request per document, no retries, no streaming.
pub struct CompletionGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CompletionGenerator {
    /// Create a generator targeting a specific completion endpoint.
    ///
    /// * `api_url` - HTTP base URL, e.g. `https://api.openai.com/v1`.
    /// * `api_key` - bearer credential for the hosted API.
    /// * `model`   - model identifier passed through verbatim.
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    async fn request_completion(
        &self,
        project: &ProjectFacts,
        doc_type: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Generate a {doc_type} for project {} located at {}.",
                        project.name,
                        project.location_str(),
                    ),
                },
            ],
        };

        let response: ChatResponse = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|c| !c.is_empty()))
    }
}

#[async_trait]
impl ContentGenerator for CompletionGenerator {
    async fn generate(&self, project: &ProjectFacts, doc_type: &str) -> String {
        match self.request_completion(project, doc_type).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::warn!(doc_type, "Completion returned no content, using fallback");
                FALLBACK_CONTENT.to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, doc_type, "Completion request failed, using fallback");
                FALLBACK_CONTENT.to_string()
            }
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

// ---------------------------------------------------------------------------
// Deterministic template
// ---------------------------------------------------------------------------

/// Produces the fixed review-only mock document.
///
/// Byte-identical output for identical inputs, which the tests rely on.
pub struct TemplateGenerator;

#[async_trait]
impl ContentGenerator for TemplateGenerator {
    async fn generate(&self, project: &ProjectFacts, doc_type: &str) -> String {
        format!(
            "MOCK DOCUMENT - {}\n\nProject: {}\nLocation: {}\n\n\
             This is a generated document for review purposes only.\n\n\
             1. SCOPE\nThe scope of work includes...\n\n\
             2. TERMS\nStandard terms apply.",
            doc_type.to_uppercase(),
            project.name,
            project.location_str(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn facts() -> ProjectFacts {
        ProjectFacts {
            name: "Warehouse A".to_string(),
            location: Some("Plot 4".to_string()),
        }
    }

    #[tokio::test]
    async fn template_embeds_type_name_and_location() {
        let content = TemplateGenerator.generate(&facts(), "permit").await;
        assert!(content.contains("MOCK DOCUMENT - PERMIT"));
        assert!(content.contains("Project: Warehouse A"));
        assert!(content.contains("Location: Plot 4"));
        assert!(content.contains("1. SCOPE"));
        assert!(content.contains("2. TERMS"));
    }

    #[tokio::test]
    async fn template_is_deterministic() {
        let a = TemplateGenerator.generate(&facts(), "contract").await;
        let b = TemplateGenerator.generate(&facts(), "contract").await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn template_handles_missing_location() {
        let project = ProjectFacts {
            name: "Warehouse A".to_string(),
            location: None,
        };
        let content = TemplateGenerator.generate(&project, "bid").await;
        assert!(content.contains("Location: \n"));
    }

    #[tokio::test]
    async fn completion_generator_falls_back_when_unreachable() {
        // Nothing listens on this port; the request error must degrade to
        // the fallback string, never an error.
        let generator = CompletionGenerator::new(
            "http://127.0.0.1:9".to_string(),
            "test-key".to_string(),
            "gpt-4o".to_string(),
        );
        let content = generator.generate(&facts(), "permit").await;
        assert_eq!(content, "Content generation failed.");
    }
}
