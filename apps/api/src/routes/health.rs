use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness plus the availability of each service.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Unified Skills API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "skill_matcher": "Available",
            "skill_recommender": "Available",
            "skill_gap_analyzer": "Available",
            "skill_swapper": "Available"
        }
    }))
}
