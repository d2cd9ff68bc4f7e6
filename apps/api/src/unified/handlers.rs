//! Axum route handlers that span services: comprehensive analysis and service metadata.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{require_non_empty, ApiJson, AppError};
use crate::gaps::analyzer::{analyze_gaps, GapAnalysis};
use crate::matching::matcher::{find_matches, MatchQuery, MatchResult};
use crate::models::response::{ServiceResponse, UNIFIED};
use crate::recommend::recommender::{recommend, ExperienceLevel, RecommendQuery, RecommendationSet};
use crate::state::AppState;
use crate::unified::summary::{data_summary, total_endpoints, DataSummary, ServiceInfo, SERVICES};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ComprehensiveRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub target_role: Option<String>,
    pub career_goal: Option<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub desired_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComprehensiveResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_analysis: Option<GapAnalysis>,
    pub recommendations: RecommendationSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_matches: Option<Vec<MatchResult>>,
}

#[derive(Debug, Serialize)]
pub struct ComprehensiveProfile {
    pub current_skills: Vec<String>,
    pub target_role: Option<String>,
    pub career_goal: Option<String>,
    pub experience_level: ExperienceLevel,
    pub desired_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComprehensiveResponse {
    pub comprehensive_analysis: ComprehensiveResults,
    pub user_profile: ComprehensiveProfile,
}

#[derive(Debug, Serialize)]
pub struct DataSummaryResponse {
    pub data_summary: DataSummary,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub api_name: &'static str,
    pub version: &'static str,
    pub services: &'static [ServiceInfo],
    pub total_endpoints: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/comprehensive-analysis
///
/// Runs the gap analyzer (when a target role is given), the recommender, and the matcher
/// (when desired skills are given) over one profile.
pub async fn handle_comprehensive_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ComprehensiveRequest>,
) -> Result<Json<ServiceResponse<ComprehensiveResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;

    let target_role = request.target_role.filter(|r| !r.trim().is_empty());
    let gap_analysis = target_role
        .as_deref()
        .map(|role| analyze_gaps(&state.catalog, &request.current_skills, role));

    let recommendations = recommend(
        &state.catalog,
        RecommendQuery {
            current_skills: &request.current_skills,
            career_goal: request.career_goal.as_deref(),
            level: request.experience_level,
        },
    );

    let skill_matches = if request.desired_skills.is_empty() {
        None
    } else {
        let outcome = find_matches(
            &state.catalog,
            MatchQuery {
                user_skills: &request.current_skills,
                desired_skills: &request.desired_skills,
            },
        );
        if outcome.fell_back {
            warn!(strategy = outcome.strategy, "no complementary matches, used loose matching");
        }
        Some(outcome.output)
    };

    debug!(
        gap_analysis = gap_analysis.is_some(),
        recommendations = recommendations.recommendations.len(),
        matches = skill_matches.as_ref().map_or(0, Vec::len),
        "comprehensive analysis computed"
    );

    Ok(ServiceResponse::ok(
        UNIFIED,
        ComprehensiveResponse {
            comprehensive_analysis: ComprehensiveResults {
                gap_analysis,
                recommendations,
                skill_matches,
            },
            user_profile: ComprehensiveProfile {
                current_skills: request.current_skills,
                target_role,
                career_goal: request.career_goal,
                experience_level: request.experience_level,
                desired_skills: request.desired_skills,
            },
        },
    ))
}

/// GET /api/data-summary
pub async fn handle_data_summary(
    State(state): State<AppState>,
) -> Json<ServiceResponse<DataSummaryResponse>> {
    ServiceResponse::ok(
        UNIFIED,
        DataSummaryResponse {
            data_summary: data_summary(&state.catalog),
        },
    )
}

/// GET /api/status
pub async fn handle_status() -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        api_name: "Unified Skills API",
        version: env!("CARGO_PKG_VERSION"),
        services: SERVICES,
        total_endpoints: total_endpoints(),
    })
}
