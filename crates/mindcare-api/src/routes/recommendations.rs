use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use mindcare_core::models::recommendation::Recommendation;
use mindcare_triage::recommend::recommendations_for;

use crate::routes::timestamp;

#[derive(Serialize)]
pub struct RecommendationsResponse {
    success: bool,
    recommendations: Vec<Recommendation>,
    timestamp: String,
}

/// Quick list for one subscale. Unknown names get an empty list.
pub async fn get_recommendations(Path(kind): Path<String>) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        success: true,
        recommendations: recommendations_for(&kind),
        timestamp: timestamp(),
    })
}
