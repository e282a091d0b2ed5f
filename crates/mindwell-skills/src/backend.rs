//! OpenAI-compatible chat-completions backend.

use mindwell_core::{
    ContentGenerator, CoreConfig, Credential, CredentialPolicy, GenerationError, GenerationPrompt,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const BACKEND_NAME: &str = "openai";
const TEMPERATURE: f32 = 0.7;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Sends one chat-completions request per prompt. The client timeout bounds the call.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_url: String,
    model: String,
    credential: Credential,
}

impl OpenAiBackend {
    pub fn new(
        api_url: impl Into<String>,
        model: impl Into<String>,
        credential: Credential,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Transport(Box::new(e)))?;
        Ok(Self {
            client,
            api_url: api_url.into(),
            model: model.into(),
            credential,
        })
    }

    /// Builds a backend only when `policy` admits the configured credential.
    pub fn from_config(config: &CoreConfig, policy: CredentialPolicy) -> Option<Self> {
        let credential = config.credential();
        tracing::info!(
            target: "mindwell::backend",
            policy = ?policy,
            present = credential.is_some(),
            length = credential.map(Credential::len).unwrap_or(0),
            "Credential status"
        );
        if !policy.admits(credential) {
            return None;
        }
        let credential = credential?.clone();
        match Self::new(
            config.llm_api_url.clone(),
            config.llm_model.clone(),
            credential,
            Duration::from_secs(config.request_timeout_secs),
        ) {
            Ok(backend) => Some(backend),
            Err(e) => {
                tracing::warn!(target: "mindwell::backend", error = %e, "HTTP client build failed; backend disabled");
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl ContentGenerator for OpenAiBackend {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationError> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = prompt.system.as_deref() {
            messages.push(ChatMessage { role: "system", content: system });
        }
        messages.push(ChatMessage { role: "user", content: &prompt.user });

        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| GenerationError::Malformed("no choices in response".to_string()))?;

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }
}
