//! Generation backend seam: the one capability the handlers need from an LLM.

use thiserror::Error;

/// Prompt sent to a generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPrompt {
    /// Optional system instruction.
    pub system: Option<String>,
    pub user: String,
}

impl GenerationPrompt {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// Why generation did not produce usable content. Every variant is recoverable:
/// handlers answer with static content instead.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation backend not configured (credential missing or rejected)")]
    Unconfigured,
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("backend returned empty content")]
    EmptyResponse,
    #[error("malformed backend response: {0}")]
    Malformed(String),
    #[error("structured output failed validation: {0}")]
    InvalidPlan(String),
}

/// Trait implemented by generation backends (live API adapters, test doubles).
#[async_trait::async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &str;

    /// Single attempt; no retries.
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError>;
}
