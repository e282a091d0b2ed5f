//! `GET /api/crisis-resources`: hotlines and grounding techniques for flagged check-ins.

use mindwell_core::{crisis_resources, CrisisResources};

pub(crate) async fn crisis_resources_handler() -> axum::Json<CrisisResources> {
    axum::Json(crisis_resources())
}
