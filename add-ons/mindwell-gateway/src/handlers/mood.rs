//! `POST /api/mood-analysis`

use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use mindwell_core::{GuidanceResult, MoodAnalysisRequest};
use mindwell_skills::MoodAnalyzer;

/// The body is parsed as JSON whatever its `Content-Type`. Only an unparseable body
/// gets the generic supportive message, and never a 4xx.
pub(crate) async fn mood_analysis(
    State(state): State<AppState>,
    body: Bytes,
) -> axum::Json<GuidanceResult> {
    match serde_json::from_slice::<MoodAnalysisRequest>(&body) {
        Ok(req) => {
            tracing::info!(
                target: "mindwell::gateway",
                has_description = req.description.is_some(),
                history_len = req.previous_moods.as_ref().map(Vec::len).unwrap_or(0),
                "Mood analysis request received"
            );
            axum::Json(state.mood_analyzer.analyze(&req).await)
        }
        Err(e) => {
            tracing::warn!(
                target: "mindwell::gateway",
                error = %e,
                "Unreadable mood analysis body, returning generic support"
            );
            axum::Json(MoodAnalyzer::unavailable())
        }
    }
}
