//! Axum route handlers for the Skill Recommender API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_non_empty, ApiJson, ApiPath, AppError};
use crate::models::response::{ServiceResponse, SKILL_RECOMMENDER};
use crate::recommend::insights::{analyze_skills, SkillsInsights};
use crate::recommend::learning_path::{derive_learning_path, LearningPath};
use crate::recommend::recommender::{recommend, ExperienceLevel, RecommendQuery, RecommendationSet};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub career_goal: Option<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Serialize)]
pub struct RecommenderProfile {
    pub current_skills: Vec<String>,
    pub career_goal: Option<String>,
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: RecommendationSet,
    pub user_profile: RecommenderProfile,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(alias = "career_goal")]
    pub target_career: Option<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
}

#[derive(Debug, Serialize)]
pub struct LearningPathResponse {
    pub learning_path: LearningPath,
}

#[derive(Debug, Deserialize)]
pub struct SkillsAnalysisRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillsAnalysisResponse {
    pub analysis: SkillsInsights,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CareerPathsResponse {
    pub career_paths: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct CareerPathDetail {
    pub name: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerPathResponse {
    pub career_path: CareerPathDetail,
}

#[derive(Debug, Serialize)]
pub struct TrendingResponse {
    pub trending_skills: BTreeMap<String, Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RecommendationRequest>,
) -> Result<Json<ServiceResponse<RecommendationResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;

    let recommendations = recommend(
        &state.catalog,
        RecommendQuery {
            current_skills: &request.current_skills,
            career_goal: request.career_goal.as_deref(),
            level: request.experience_level,
        },
    );
    debug!(
        source = recommendations.source,
        total = recommendations.recommendations.len(),
        "recommendations computed"
    );

    Ok(ServiceResponse::ok(
        SKILL_RECOMMENDER,
        RecommendationResponse {
            recommendations,
            user_profile: RecommenderProfile {
                current_skills: request.current_skills,
                career_goal: request.career_goal,
                experience_level: request.experience_level,
            },
        },
    ))
}

/// POST /api/learning-path
///
/// Recommendations for the target career, bucketed into Foundation / Specialization /
/// Advanced phases.
pub async fn handle_learning_path(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LearningPathRequest>,
) -> Result<Json<ServiceResponse<LearningPathResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;

    let recommendations = recommend(
        &state.catalog,
        RecommendQuery {
            current_skills: &request.current_skills,
            career_goal: request.target_career.as_deref(),
            level: request.experience_level,
        },
    );

    Ok(ServiceResponse::ok(
        SKILL_RECOMMENDER,
        LearningPathResponse {
            learning_path: derive_learning_path(recommendations),
        },
    ))
}

/// POST /api/skills-analysis
pub async fn handle_skills_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SkillsAnalysisRequest>,
) -> Result<Json<ServiceResponse<SkillsAnalysisResponse>>, AppError> {
    require_non_empty("current_skills", &request.current_skills)?;

    Ok(ServiceResponse::ok(
        SKILL_RECOMMENDER,
        SkillsAnalysisResponse {
            analysis: analyze_skills(&state.catalog, &request.current_skills),
        },
    ))
}

/// GET /api/categories
pub async fn handle_categories(
    State(state): State<AppState>,
) -> Json<ServiceResponse<CategoriesResponse>> {
    let categories = state
        .catalog
        .categories()
        .iter()
        .map(|c| (c.name.clone(), c.skills.clone()))
        .collect();
    ServiceResponse::ok(SKILL_RECOMMENDER, CategoriesResponse { categories })
}

/// GET /api/career-paths
pub async fn handle_career_paths(
    State(state): State<AppState>,
) -> Json<ServiceResponse<CareerPathsResponse>> {
    let career_paths = state
        .catalog
        .career_paths()
        .iter()
        .map(|p| (p.name.clone(), p.required_skills.clone()))
        .collect();
    ServiceResponse::ok(SKILL_RECOMMENDER, CareerPathsResponse { career_paths })
}

/// GET /api/career-path/*name
///
/// Wildcard so names containing '/' (e.g. "UI/UX Designer") resolve.
pub async fn handle_career_path(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<ServiceResponse<CareerPathResponse>>, AppError> {
    let name = name.trim_start_matches('/');
    let path = state
        .catalog
        .career_path(name)
        .ok_or_else(|| AppError::NotFound(format!("Career path '{name}' not found")))?;

    Ok(ServiceResponse::ok(
        SKILL_RECOMMENDER,
        CareerPathResponse {
            career_path: CareerPathDetail {
                name: path.name.clone(),
                required_skills: path.required_skills.clone(),
            },
        },
    ))
}

/// GET /api/trending-skills
pub async fn handle_trending(
    State(state): State<AppState>,
) -> Json<ServiceResponse<TrendingResponse>> {
    let trending_skills = state
        .catalog
        .trending()
        .iter()
        .map(|t| (t.category.clone(), t.skills.clone()))
        .collect();
    ServiceResponse::ok(SKILL_RECOMMENDER, TrendingResponse { trending_skills })
}
