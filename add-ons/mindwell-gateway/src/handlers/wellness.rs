//! `POST /api/wellness-plan`

use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use mindwell_core::{WellnessPlan, WellnessPlanRequest};

pub(crate) async fn wellness_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> axum::Json<WellnessPlan> {
    match serde_json::from_slice::<WellnessPlanRequest>(&body) {
        Ok(req) => axum::Json(state.planner.plan(&req).await),
        Err(e) => {
            tracing::warn!(
                target: "mindwell::gateway",
                error = %e,
                "Unreadable wellness plan body, returning fallback plan"
            );
            axum::Json(state.planner.fallback())
        }
    }
}
