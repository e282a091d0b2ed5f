//! Shared types used across all companion crates.

use crate::credential::Credential;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Env var holding the single generation-backend credential.
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
/// Env var pointing at the gateway TOML file.
pub const ENV_CONFIG_PATH: &str = "MINDWELL_CONFIG";
pub const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Current time as an ISO-8601 UTC string with millisecond precision.
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Five-point mood scale used by the check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodLevel {
    VerySad = 1,
    Sad = 2,
    Neutral = 3,
    Good = 4,
    Great = 5,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VerySad,
        MoodLevel::Sad,
        MoodLevel::Neutral,
        MoodLevel::Good,
        MoodLevel::Great,
    ];

    /// Maps 1..=5 to a level; anything else is `None`.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            1 => Some(MoodLevel::VerySad),
            2 => Some(MoodLevel::Sad),
            3 => Some(MoodLevel::Neutral),
            4 => Some(MoodLevel::Good),
            5 => Some(MoodLevel::Great),
            _ => None,
        }
    }

    /// Accepts a JSON integer, an integral float or a numeric string.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .and_then(Self::from_raw),
            serde_json::Value::String(s) => s.trim().parse::<i64>().ok().and_then(Self::from_raw),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::VerySad => "Very Sad",
            MoodLevel::Sad => "Sad",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Good => "Good",
            MoodLevel::Great => "Great",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value(), self.label())
    }
}

/// One entry of a mood history. Clients send numbers or labels; anything else is
/// kept as-is since history is only prompt context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoodEntry {
    Level(i64),
    Score(f64),
    Label(String),
    Other(serde_json::Value),
}

impl fmt::Display for MoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodEntry::Level(n) => write!(f, "{}", n),
            MoodEntry::Score(x) => write!(f, "{}", x),
            MoodEntry::Label(s) => f.write_str(s),
            MoodEntry::Other(serde_json::Value::Null) => Ok(()),
            MoodEntry::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Body of `POST /api/mood-analysis`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysisRequest {
    /// Raw mood value; resolved leniently by [`MoodLevel::from_value`].
    #[serde(default)]
    pub mood: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    /// Most recent first.
    #[serde(default)]
    pub previous_moods: Option<Vec<MoodEntry>>,
}

/// A single check-in, normalized from the request and stamped on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodReading {
    /// `None` when the caller sent no mood or one outside 1..=5.
    pub level: Option<MoodLevel>,
    pub description: Option<String>,
    pub timestamp: String,
}

impl MoodReading {
    pub fn from_request(req: &MoodAnalysisRequest) -> Self {
        Self {
            level: req.mood.as_ref().and_then(MoodLevel::from_value),
            description: req.description.clone(),
            timestamp: iso_timestamp(),
        }
    }

    /// Level used for fallback content: unknown degrades to the mid-point.
    pub fn fallback_level(&self) -> MoodLevel {
        self.level.unwrap_or(MoodLevel::Neutral)
    }
}

/// Response of the mood-analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceResult {
    #[serde(rename = "response")]
    pub response_text: String,
    pub is_crisis: bool,
    pub timestamp: String,
}

impl GuidanceResult {
    /// Builds a result stamped with the current time.
    pub fn now(response_text: impl Into<String>, is_crisis: bool) -> Self {
        Self {
            response_text: response_text.into(),
            is_crisis,
            timestamp: iso_timestamp(),
        }
    }
}

/// Body of `POST /api/wellness-plan`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WellnessPlanRequest {
    #[serde(default)]
    pub moods: Option<Vec<MoodEntry>>,
    #[serde(default)]
    pub preferences: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCategory {
    Mindfulness,
    Exercise,
    Social,
    Creative,
    SelfCare,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 5] = [
        ActivityCategory::Mindfulness,
        ActivityCategory::Exercise,
        ActivityCategory::Social,
        ActivityCategory::Creative,
        ActivityCategory::SelfCare,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityCategory::Mindfulness => "mindfulness",
            ActivityCategory::Exercise => "exercise",
            ActivityCategory::Social => "social",
            ActivityCategory::Creative => "creative",
            ActivityCategory::SelfCare => "self-care",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown activity category: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessActivity {
    pub title: String,
    pub description: String,
    /// Human-readable duration, e.g. "15 minutes". Wire name is `duration`.
    #[serde(rename = "duration")]
    pub duration_label: String,
    pub category: ActivityCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessPlan {
    pub activities: Vec<WellnessActivity>,
    pub goals: Vec<String>,
    pub affirmation: String,
}

impl WellnessPlan {
    /// Number of activities in a generated plan.
    pub const ACTIVITY_COUNT: usize = 5;
    /// Number of goals in a generated plan.
    pub const GOAL_COUNT: usize = 3;

    /// First category, in [`ActivityCategory::ALL`] order, with no activity.
    pub fn missing_category(&self) -> Option<ActivityCategory> {
        ActivityCategory::ALL
            .into_iter()
            .find(|c| !self.activities.iter().any(|a| a.category == *c))
    }
}

/// Gateway configuration. Load from TOML or env.
#[derive(Debug, Clone, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by `/v1/status`.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// OpenAI-compatible chat-completions endpoint.
    pub llm_api_url: String,
    pub llm_model: String,
    /// Upper bound on a single backend call. There are no retries.
    pub request_timeout_secs: u64,
    /// Allowed CORS origins. Empty means any localhost origin.
    #[serde(default)]
    pub frontend_origins: Vec<String>,
    /// Backend credential, taken from `OPENAI_API_KEY`. Absence is a normal condition.
    #[serde(default)]
    pub openai_api_key: Option<Credential>,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: `OPENAI_API_KEY` > `MINDWELL__*` env >
    /// TOML at `MINDWELL_CONFIG` (or `config/gateway.toml`) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| "config/gateway.toml".to_string());
        Self::load_from(Path::new(&config_path), std::env::var(ENV_API_KEY).ok())
    }

    /// Same as [`CoreConfig::load`] with an explicit file path and credential.
    pub fn load_from(path: &Path, api_key: Option<String>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("app_name", "MindWell Gateway")?
            .set_default("port", 8001_i64)?
            .set_default("llm_api_url", DEFAULT_LLM_API_URL)?
            .set_default("llm_model", "gpt-4")?
            .set_default("request_timeout_secs", 30_i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("MINDWELL").separator("__"))
            .set_override_option("openai_api_key", api_key)?
            .build()?;

        built.try_deserialize()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.openai_api_key.as_ref()
    }
}
