use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// `JWT_SECRET`, which must be set. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry duration).
    pub jwt: JwtConfig,
    /// Document content generator selection and credentials.
    pub generator: GeneratorConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
            generator: GeneratorConfig::from_env(),
        }
    }
}

/// Placeholder value some deployments ship instead of a real credential;
/// treated the same as no credential at all.
const PLACEHOLDER_API_KEY: &str = "sk-proj-placeholder";

/// Configuration for the document content generator.
///
/// The presence of a real `OPENAI_API_KEY` is the single switch between the
/// hosted-completion and deterministic-template generation strategies.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Completion API credential, if any.
    pub api_key: Option<String>,
    /// Completion API base URL (default: `https://api.openai.com/v1`).
    pub api_url: String,
    /// Model identifier (default: `gpt-4o`).
    pub model: String,
}

impl GeneratorConfig {
    /// Load generator configuration from environment variables.
    ///
    /// | Env Var          | Default                     |
    /// |------------------|-----------------------------|
    /// | `OPENAI_API_KEY` | unset (template generator)  |
    /// | `OPENAI_API_URL` | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`   | `gpt-4o`                    |
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            api_url: std::env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".into()),
        }
    }

    /// The usable credential, or `None` when unset, empty, or the known
    /// placeholder.
    pub fn live_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }
}
