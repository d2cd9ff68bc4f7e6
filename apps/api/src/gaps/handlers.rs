//! Axum route handlers for the Skill Gap Analyzer API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_non_empty, ApiJson, ApiPath, AppError};
use crate::gaps::analyzer::{analyze_gaps, GapAnalysis};
use crate::gaps::comparison::{compare_roles, skills_overview, RoleComparison, SkillsOverview};
use crate::models::response::{ServiceResponse, SKILL_GAP_ANALYZER};
use crate::models::role::RoleRequirement;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub target_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzerProfile {
    pub current_skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: GapAnalysis,
    pub user_profile: AnalyzerProfile,
    pub role_in_database: bool,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
    pub total_roles: usize,
}

#[derive(Debug, Serialize)]
pub struct RoleDetail {
    pub name: String,
    pub requirements: RoleRequirement,
}

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub role: RoleDetail,
}

#[derive(Debug, Deserialize)]
pub struct CompareRolesRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparisonProfile {
    pub current_skills: Vec<String>,
    pub total_skills: usize,
}

#[derive(Debug, Serialize)]
pub struct CompareRolesResponse {
    pub comparisons: Vec<RoleComparison>,
    pub user_profile: ComparisonProfile,
}

#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub overview: SkillsOverview,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AnalyzeRequest>,
) -> Result<Json<ServiceResponse<AnalyzeResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;
    let target_role = request
        .target_role
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("target_role is required".to_string()))?;

    let analysis = analyze_gaps(&state.catalog, &request.current_skills, &target_role);
    debug!(
        target_role = %target_role,
        readiness = %analysis.overall_readiness,
        "gap analysis computed"
    );

    Ok(ServiceResponse::ok(
        SKILL_GAP_ANALYZER,
        AnalyzeResponse {
            analysis,
            role_in_database: state.catalog.role(&target_role).is_some(),
            user_profile: AnalyzerProfile {
                current_skills: request.current_skills,
                target_role,
            },
        },
    ))
}

/// GET /api/roles
pub async fn handle_roles(State(state): State<AppState>) -> Json<ServiceResponse<RolesResponse>> {
    let roles: Vec<String> = state.catalog.roles().iter().map(|r| r.name.clone()).collect();
    ServiceResponse::ok(
        SKILL_GAP_ANALYZER,
        RolesResponse {
            total_roles: roles.len(),
            roles,
        },
    )
}

/// GET /api/role/*name
pub async fn handle_role(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<ServiceResponse<RoleResponse>>, AppError> {
    let name = name.trim_start_matches('/');
    let requirements = state
        .catalog
        .role(name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Role '{name}' not found in database")))?;

    Ok(ServiceResponse::ok(
        SKILL_GAP_ANALYZER,
        RoleResponse {
            role: RoleDetail {
                name: requirements.name.clone(),
                requirements,
            },
        },
    ))
}

/// POST /api/compare-roles
pub async fn handle_compare_roles(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CompareRolesRequest>,
) -> Result<Json<ServiceResponse<CompareRolesResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;
    require_non_empty("roles", &request.roles)?;

    let comparisons = compare_roles(&state.catalog, &request.current_skills, &request.roles);

    Ok(ServiceResponse::ok(
        SKILL_GAP_ANALYZER,
        CompareRolesResponse {
            comparisons,
            user_profile: ComparisonProfile {
                total_skills: request.current_skills.len(),
                current_skills: request.current_skills,
            },
        },
    ))
}

/// POST /api/skills-overview
pub async fn handle_skills_overview(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<OverviewRequest>,
) -> Result<Json<ServiceResponse<OverviewResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;

    Ok(ServiceResponse::ok(
        SKILL_GAP_ANALYZER,
        OverviewResponse {
            overview: skills_overview(&state.catalog, &request.current_skills),
        },
    ))
}
