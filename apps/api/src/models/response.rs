use axum::Json;
use serde::Serialize;

pub const SKILL_MATCHER: &str = "skill_matcher";
pub const SKILL_RECOMMENDER: &str = "skill_recommender";
pub const SKILL_GAP_ANALYZER: &str = "skill_gap_analyzer";
pub const SKILL_SWAPPER_SEARCH: &str = "skill_swapper_search";
pub const SKILL_SWAPPER_BROWSE: &str = "skill_swapper_browse";
pub const UNIFIED: &str = "unified";

/// Success envelope shared by every service endpoint.
/// The payload's fields are flattened next to `success` and `service`.
#[derive(Debug, Serialize)]
pub struct ServiceResponse<T: Serialize> {
    pub success: bool,
    pub service: &'static str,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ServiceResponse<T> {
    pub fn ok(service: &'static str, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            service,
            data,
        })
    }
}
