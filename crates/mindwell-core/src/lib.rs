//! mindwell-core: companion core library (shared types, config, credential policy,
//! crisis detection and the static content library).
//!
//! The gateway and the skills crate depend only on the re-exports below.

mod content;
mod credential;
mod crisis;
mod generator;
mod shared;

// Shared types and configuration
pub use shared::{
    ActivityCategory, CoreConfig, GuidanceResult, MoodAnalysisRequest, MoodEntry, MoodLevel,
    MoodReading, WellnessActivity, WellnessPlan, WellnessPlanRequest, ENV_API_KEY,
};

// Credential policy
pub use credential::{Credential, CredentialPolicy, PLACEHOLDER_CREDENTIAL};

// Crisis keyword detector
pub use crisis::{detect_crisis, CRISIS_PHRASES};

// Static content library
pub use content::{
    crisis_resources, fallback_plans, mood_response, pick_fallback_plan, ContactKind,
    CopingStrategy, CrisisResources, EmergencyContact, PlanPicker, ThreadRngPicker,
    GENERIC_SUPPORT_MESSAGE,
};

// Generation backend seam
pub use generator::{ContentGenerator, GenerationError, GenerationPrompt};
