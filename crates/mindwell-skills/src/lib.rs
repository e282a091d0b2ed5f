//! Companion skills: mood analysis and wellness planning, each a two-stage pipeline
//! (generation backend, then static fallback).

mod backend;
mod mood_analysis;
mod parse;
mod prompt;
mod wellness_plan;

pub use backend::OpenAiBackend;
pub use mood_analysis::MoodAnalyzer;
pub use parse::{parse_plan, PlanValidationError};
pub use prompt::{mood_prompt, plan_prompt, MOOD_SYSTEM_PROMPT, NO_PREVIOUS_DATA};
pub use wellness_plan::WellnessPlanner;
