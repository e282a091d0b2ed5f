//! Structured-output parsing: pulls the plan object out of raw backend text and
//! validates it against the wellness-plan shape.

use mindwell_core::{ActivityCategory, GenerationError, WellnessActivity, WellnessPlan};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanValidationError {
    #[error("no JSON object found in backend output")]
    NoJsonObject,
    #[error("invalid JSON: {0}")]
    Json(String),
    #[error("missing field `{0}`")]
    MissingField(String),
    #[error("expected {expected} {field}, got {actual}")]
    Arity {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("activity {index}: unknown category `{category}`")]
    UnknownCategory { index: usize, category: String },
    #[error("no activity in category `{0}`")]
    MissingCategory(ActivityCategory),
    #[error("affirmation is empty")]
    EmptyAffirmation,
}

impl From<PlanValidationError> for GenerationError {
    fn from(e: PlanValidationError) -> Self {
        GenerationError::InvalidPlan(e.to_string())
    }
}

/// Fields are optional here so a missing one yields a precise error instead of a serde message.
#[derive(Deserialize)]
struct RawActivity {
    title: Option<String>,
    description: Option<String>,
    #[serde(alias = "durationLabel")]
    duration: Option<String>,
    category: Option<String>,
}

#[derive(Deserialize)]
struct RawPlan {
    activities: Option<Vec<RawActivity>>,
    goals: Option<Vec<String>>,
    affirmation: Option<String>,
}

/// Outermost `{ ... }` span, which skips code fences and surrounding prose.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

fn require<T>(value: Option<T>, field: impl Into<String>) -> Result<T, PlanValidationError> {
    value.ok_or_else(|| PlanValidationError::MissingField(field.into()))
}

fn check_arity(field: &'static str, expected: usize, actual: usize) -> Result<(), PlanValidationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PlanValidationError::Arity { field, expected, actual })
    }
}

fn to_activity(index: usize, raw: RawActivity) -> Result<WellnessActivity, PlanValidationError> {
    let category_raw = require(raw.category, format!("activities[{index}].category"))?;
    let category = category_raw
        .trim()
        .to_lowercase()
        .parse::<ActivityCategory>()
        .map_err(|_| PlanValidationError::UnknownCategory {
            index,
            category: category_raw.clone(),
        })?;
    Ok(WellnessActivity {
        title: require(raw.title, format!("activities[{index}].title"))?,
        description: require(raw.description, format!("activities[{index}].description"))?,
        duration_label: require(raw.duration, format!("activities[{index}].duration"))?,
        category,
    })
}

/// Parses backend text into a plan with exactly 5 activities covering all five
/// categories, exactly 3 goals and a non-empty affirmation.
pub fn parse_plan(raw: &str) -> Result<WellnessPlan, PlanValidationError> {
    let json = extract_json_object(raw).ok_or(PlanValidationError::NoJsonObject)?;
    let plan: RawPlan =
        serde_json::from_str(json).map_err(|e| PlanValidationError::Json(e.to_string()))?;

    let raw_activities = require(plan.activities, "activities")?;
    let goals = require(plan.goals, "goals")?;
    let affirmation = require(plan.affirmation, "affirmation")?;

    check_arity("activities", WellnessPlan::ACTIVITY_COUNT, raw_activities.len())?;
    check_arity("goals", WellnessPlan::GOAL_COUNT, goals.len())?;
    if affirmation.trim().is_empty() {
        return Err(PlanValidationError::EmptyAffirmation);
    }

    let activities = raw_activities
        .into_iter()
        .enumerate()
        .map(|(i, a)| to_activity(i, a))
        .collect::<Result<Vec<_>, _>>()?;

    let plan = WellnessPlan {
        activities,
        goals,
        affirmation,
    };
    match plan.missing_category() {
        Some(missing) => Err(PlanValidationError::MissingCategory(missing)),
        None => Ok(plan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_plan_json() -> serde_json::Value {
        serde_json::json!({
            "activities": [
                { "title": "Breath Count", "description": "Count ten slow breaths", "duration": "5 minutes", "category": "mindfulness" },
                { "title": "Stair Climb", "description": "Take the stairs twice", "duration": "10 minutes", "category": "exercise" },
                { "title": "Call a Friend", "description": "Catch up with someone", "duration": "20 minutes", "category": "social" },
                { "title": "Doodle", "description": "Fill a page with shapes", "duration": "15 minutes", "category": "creative" },
                { "title": "Early Night", "description": "Lights out by ten", "duration": "8 hours", "category": "self-care" }
            ],
            "goals": ["Sleep more", "Move daily", "Stay connected"],
            "affirmation": "I am allowed to rest."
        })
    }

    #[test]
    fn parses_plan_wrapped_in_prose_and_fences() {
        let raw = format!("Here is your plan:\n```json\n{}\n```\nTake care!", valid_plan_json());
        let plan = parse_plan(&raw).unwrap();
        assert_eq!(plan.activities.len(), 5);
        assert_eq!(plan.activities[4].category, ActivityCategory::SelfCare);
        assert_eq!(plan.activities[0].duration_label, "5 minutes");
        assert_eq!(plan.goals[2], "Stay connected");
        assert_eq!(plan.missing_category(), None);
    }

    #[test]
    fn category_matching_ignores_case_and_padding() {
        let mut json = valid_plan_json();
        json["activities"][4]["category"] = serde_json::json!(" Self-Care ");
        assert_eq!(
            parse_plan(&json.to_string()).unwrap().activities[4].category,
            ActivityCategory::SelfCare
        );
    }

    #[test]
    fn rejects_text_without_object() {
        assert_eq!(parse_plan("sorry, I can't help"), Err(PlanValidationError::NoJsonObject));
    }

    #[test]
    fn rejects_unknown_category() {
        let mut json = valid_plan_json();
        json["activities"][1]["category"] = serde_json::json!("cardio");
        assert_eq!(
            parse_plan(&json.to_string()),
            Err(PlanValidationError::UnknownCategory { index: 1, category: "cardio".to_string() })
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        let mut json = valid_plan_json();
        json["goals"] = serde_json::json!(["Only one"]);
        assert_eq!(
            parse_plan(&json.to_string()),
            Err(PlanValidationError::Arity { field: "goals", expected: 3, actual: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_categories() {
        let mut json = valid_plan_json();
        json["activities"][3]["category"] = serde_json::json!("mindfulness");
        assert_eq!(
            parse_plan(&json.to_string()),
            Err(PlanValidationError::MissingCategory(ActivityCategory::Creative))
        );
    }

    #[test]
    fn rejects_missing_fields() {
        let mut json = valid_plan_json();
        json["activities"][2].as_object_mut().unwrap().remove("duration");
        assert_eq!(
            parse_plan(&json.to_string()),
            Err(PlanValidationError::MissingField("activities[2].duration".to_string()))
        );

        let mut json = valid_plan_json();
        json.as_object_mut().unwrap().remove("affirmation");
        assert_eq!(
            parse_plan(&json.to_string()),
            Err(PlanValidationError::MissingField("affirmation".to_string()))
        );
    }

    #[test]
    fn rejects_blank_affirmation() {
        let mut json = valid_plan_json();
        json["affirmation"] = serde_json::json!("  ");
        assert_eq!(parse_plan(&json.to_string()), Err(PlanValidationError::EmptyAffirmation));
    }

    #[test]
    fn converts_into_generation_error() {
        let err: GenerationError = PlanValidationError::EmptyAffirmation.into();
        assert!(matches!(err, GenerationError::InvalidPlan(ref m) if m == "affirmation is empty"));
    }
}
