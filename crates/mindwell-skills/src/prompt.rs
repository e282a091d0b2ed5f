//! Instruction templates for the generation backend.

use mindwell_core::{GenerationPrompt, MoodEntry, MoodReading, WellnessPlanRequest};
use std::fmt::Display;

pub const MOOD_SYSTEM_PROMPT: &str = "You are a compassionate mental health AI assistant. Analyze the user's mood and provide supportive, empathetic responses with practical coping strategies. Always be encouraging and never provide medical advice. If you detect signs of severe distress or crisis, recommend professional help.";

/// Stands in for an absent or empty mood history.
pub const NO_PREVIOUS_DATA: &str = "No previous data";

const NO_DESCRIPTION: &str = "No description provided";
const UNSPECIFIED_MOOD: &str = "Not specified";

const PLAN_SYSTEM_PROMPT: &str = r#"You are a supportive wellness coach. Reply with a single JSON object and nothing else. The object must have exactly this shape:
{"activities":[{"title":string,"description":string,"duration":string,"category":"mindfulness"|"exercise"|"social"|"creative"|"self-care"}],"goals":[string],"affirmation":string}"#;

const DEFAULT_PLAN_MOODS: &str = "Mixed";
const DEFAULT_PREFERENCES: &str = "General wellness";
const DEFAULT_GOALS: &str = "Improve mental well-being";

/// Comma-joined items, or `default` when there are none.
fn join_or<T: Display>(items: Option<&[T]>, default: &str) -> String {
    match items {
        Some(items) if !items.is_empty() => items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        _ => default.to_string(),
    }
}

fn text_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(default)
}

pub fn mood_prompt(reading: &MoodReading, history: Option<&[MoodEntry]>) -> GenerationPrompt {
    let mood = reading
        .level
        .map(|l| l.to_string())
        .unwrap_or_else(|| UNSPECIFIED_MOOD.to_string());
    let user = format!(
        "User's current mood: {mood}\n\
         Description: {description}\n\
         Recent mood pattern: {history}\n\
         \n\
         Please provide:\n\
         1. An empathetic response acknowledging their feelings\n\
         2. 2-3 practical coping strategies\n\
         3. A gentle encouragement\n\
         4. If concerning patterns detected, suggest professional support",
        description = text_or(reading.description.as_deref(), NO_DESCRIPTION),
        history = join_or(history, NO_PREVIOUS_DATA),
    );
    GenerationPrompt::new(user).with_system(MOOD_SYSTEM_PROMPT)
}

pub fn plan_prompt(req: &WellnessPlanRequest) -> GenerationPrompt {
    let user = format!(
        "Create a personalized wellness plan based on:\n\
         Recent moods: {moods}\n\
         User preferences: {preferences}\n\
         Goals: {goals}\n\
         \n\
         Generate exactly 5 diverse activities, one in each category (mindfulness, exercise, social, creative, self-care), \
         exactly 3 achievable goals, and 1 positive affirmation. Make the activities specific and actionable.",
        moods = join_or(req.moods.as_deref(), DEFAULT_PLAN_MOODS),
        preferences = text_or(req.preferences.as_deref(), DEFAULT_PREFERENCES),
        goals = text_or(req.goals.as_deref(), DEFAULT_GOALS),
    );
    GenerationPrompt::new(user).with_system(PLAN_SYSTEM_PROMPT)
}
