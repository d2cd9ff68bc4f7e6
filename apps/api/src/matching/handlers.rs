//! Axum route handlers for the Skill Matcher API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{ApiJson, ApiPath, AppError};
use crate::matching::matcher::{find_matches, MatchQuery, MatchResult};
use crate::models::response::{ServiceResponse, SKILL_MATCHER};
use crate::models::user::User;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub desired_skills: Vec<String>,
}

/// A match enriched with the candidate's public profile.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedMatch {
    pub user_id: u32,
    pub name: String,
    pub match_score: f64,
    pub reasons: Vec<String>,
    pub user_skills: Vec<String>,
    pub user_skills_wanted: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<EnrichedMatch>,
    pub total_matches: usize,
    pub strategy: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total_users: usize,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "skillsWanted")]
    pub skills_wanted: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddUserResponse {
    pub message: &'static str,
    pub user: User,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/matches
///
/// Ranks stored users by how well they complement the caller's skills.
pub async fn handle_matches(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MatchRequest>,
) -> Result<Json<ServiceResponse<MatchResponse>>, AppError> {
    if request.user_skills.is_empty() || request.desired_skills.is_empty() {
        return Err(AppError::Validation(
            "Both user_skills and desired_skills are required".to_string(),
        ));
    }

    let outcome = find_matches(
        &state.catalog,
        MatchQuery {
            user_skills: &request.user_skills,
            desired_skills: &request.desired_skills,
        },
    );
    if outcome.fell_back {
        warn!(strategy = outcome.strategy, "no complementary matches, used loose matching");
    }

    let matches: Vec<EnrichedMatch> = outcome
        .output
        .into_iter()
        .filter_map(|m| enrich(&state, m))
        .collect();
    debug!(total = matches.len(), "skill matches computed");

    Ok(ServiceResponse::ok(
        SKILL_MATCHER,
        MatchResponse {
            total_matches: matches.len(),
            matches,
            strategy: outcome.strategy,
        },
    ))
}

fn enrich(state: &AppState, result: MatchResult) -> Option<EnrichedMatch> {
    let user = state.catalog.user(result.user_id)?;
    Some(EnrichedMatch {
        user_id: result.user_id,
        name: user.name.clone(),
        match_score: result.match_score,
        reasons: result.reasons,
        user_skills: user.skills.clone(),
        user_skills_wanted: user.skills_wanted.clone(),
    })
}

/// GET /api/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Json<ServiceResponse<UsersResponse>> {
    let users = state.catalog.users().to_vec();
    ServiceResponse::ok(
        SKILL_MATCHER,
        UsersResponse {
            total_users: users.len(),
            users,
        },
    )
}

/// GET /api/user/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<u32>,
) -> Result<Json<ServiceResponse<UserResponse>>, AppError> {
    let user = state
        .catalog
        .user(user_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    Ok(ServiceResponse::ok(SKILL_MATCHER, UserResponse { user }))
}

/// POST /api/add-user
///
/// Returns the record a new user would get. The catalog is read-only, so nothing is
/// stored and later requests never see it.
pub async fn handle_add_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<AddUserRequest>,
) -> Result<Json<ServiceResponse<AddUserResponse>>, AppError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let id = state
        .catalog
        .next_user_id()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("user id space exhausted")))?;

    let user = User {
        id,
        name: name.to_string(),
        skills: request.skills,
        skills_wanted: request.skills_wanted,
    };

    Ok(ServiceResponse::ok(
        SKILL_MATCHER,
        AddUserResponse {
            message: "User would be added (not persisted)",
            user,
        },
    ))
}
