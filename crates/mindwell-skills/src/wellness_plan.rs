//! Wellness plan skill: mood history, preferences and goals in, structured plan out.

use crate::backend::OpenAiBackend;
use crate::{parse, prompt};
use mindwell_core::{
    pick_fallback_plan, ContentGenerator, CoreConfig, CredentialPolicy, GenerationError, PlanPicker,
    ThreadRngPicker, WellnessPlan, WellnessPlanRequest,
};
use std::sync::Arc;

/// Asks the backend for a schema-valid plan once; on any failure returns one of the
/// pre-authored plans, chosen at random so repeated fallbacks vary.
pub struct WellnessPlanner {
    generator: Option<Arc<dyn ContentGenerator>>,
    picker: Arc<dyn PlanPicker>,
}

impl WellnessPlanner {
    pub fn new(generator: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self {
            generator,
            picker: Arc::new(ThreadRngPicker),
        }
    }

    /// Uses the configured backend when the structured-plan credential rule admits the key.
    pub fn from_config(config: &CoreConfig) -> Self {
        let generator = OpenAiBackend::from_config(config, CredentialPolicy::StructuredPlan)
            .map(|b| Arc::new(b) as Arc<dyn ContentGenerator>);
        Self::new(generator)
    }

    /// Replaces the random source used for fallback selection.
    pub fn with_picker(mut self, picker: Arc<dyn PlanPicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn has_backend(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn plan(&self, req: &WellnessPlanRequest) -> WellnessPlan {
        match self.generate(req).await {
            Ok(plan) => {
                tracing::info!(target: "mindwell::plan", "Generated wellness plan");
                plan
            }
            Err(GenerationError::Unconfigured) => {
                tracing::info!(target: "mindwell::plan", "Using fallback plan - credential invalid or missing");
                self.fallback()
            }
            Err(e) => {
                tracing::warn!(target: "mindwell::plan", error = %e, "Plan generation failed, using fallback plan");
                self.fallback()
            }
        }
    }

    /// A randomly chosen pre-authored plan.
    pub fn fallback(&self) -> WellnessPlan {
        pick_fallback_plan(self.picker.as_ref())
    }

    async fn generate(&self, req: &WellnessPlanRequest) -> Result<WellnessPlan, GenerationError> {
        let generator = self.generator.as_ref().ok_or(GenerationError::Unconfigured)?;
        let raw = generator.generate(&prompt::plan_prompt(req)).await?;
        Ok(parse::parse_plan(&raw)?)
    }
}
