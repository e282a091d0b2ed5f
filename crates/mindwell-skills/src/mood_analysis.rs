//! Mood analysis skill: mood check-in in, supportive text plus crisis flag out.

use crate::backend::OpenAiBackend;
use crate::prompt;
use mindwell_core::{
    detect_crisis, mood_response, ContentGenerator, CoreConfig, CredentialPolicy, GenerationError,
    GuidanceResult, MoodAnalysisRequest, MoodReading, GENERIC_SUPPORT_MESSAGE,
};
use std::sync::Arc;

/// Tries the generation backend once, then falls back to the fixed paragraph for the mood level.
/// Never returns an error.
pub struct MoodAnalyzer {
    generator: Option<Arc<dyn ContentGenerator>>,
}

impl MoodAnalyzer {
    /// `None` means every request is answered from the static library.
    pub fn new(generator: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self { generator }
    }

    /// Uses the configured backend when the guidance credential rule admits the key.
    pub fn from_config(config: &CoreConfig) -> Self {
        let generator = OpenAiBackend::from_config(config, CredentialPolicy::Guidance)
            .map(|b| Arc::new(b) as Arc<dyn ContentGenerator>);
        Self::new(generator)
    }

    pub fn has_backend(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn analyze(&self, req: &MoodAnalysisRequest) -> GuidanceResult {
        let reading = MoodReading::from_request(req);
        tracing::debug!(
            target: "mindwell::mood",
            level = ?reading.level,
            received_at = %reading.timestamp,
            "Check-in normalized"
        );
        let response_text = self
            .generate(&reading, req)
            .await
            .unwrap_or_else(|e| {
                match e {
                    GenerationError::Unconfigured => tracing::info!(
                        target: "mindwell::mood",
                        "Generation backend not available, using fallback response"
                    ),
                    e => tracing::warn!(
                        target: "mindwell::mood",
                        error = %e,
                        "Generation failed, using fallback response"
                    ),
                }
                mood_response(reading.fallback_level()).to_string()
            });
        let is_crisis = detect_crisis(reading.description.as_deref());
        if is_crisis {
            tracing::info!(target: "mindwell::mood", "Crisis phrase detected in check-in");
        }
        GuidanceResult::now(response_text, is_crisis)
    }

    /// Result for a request that could not be read at all.
    pub fn unavailable() -> GuidanceResult {
        GuidanceResult::now(GENERIC_SUPPORT_MESSAGE, false)
    }

    async fn generate(
        &self,
        reading: &MoodReading,
        req: &MoodAnalysisRequest,
    ) -> Result<String, GenerationError> {
        let generator = self.generator.as_ref().ok_or(GenerationError::Unconfigured)?;
        let prompt = prompt::mood_prompt(reading, req.previous_moods.as_deref());
        let text = generator.generate(&prompt).await?;
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        tracing::debug!(target: "mindwell::mood", backend = generator.name(), "Generated response");
        Ok(text)
    }
}
