//! Axum route handlers for Skill Swapper search and browse.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_non_empty, ApiJson, AppError};
use crate::models::response::{ServiceResponse, SKILL_SWAPPER_BROWSE, SKILL_SWAPPER_SEARCH};
use crate::state::AppState;
use crate::swapper::browse::{browse_users, SortBy, UserSummary};
use crate::swapper::search::{search_users, SearchResult, SearchType};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub search_type: SearchType,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_keywords: Vec<String>,
    pub search_type: SearchType,
    pub users: Vec<SearchResult>,
    pub total_matches: usize,
    pub total_users_searched: usize,
}

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    pub search: Option<String>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub users: Vec<UserSummary>,
    pub total_users: usize,
    pub search_applied: bool,
    pub sort_by: SortBy,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/search-users
///
/// Ranks users by weighted keyword hits on their skills and/or wanted skills.
pub async fn handle_search_users(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SearchRequest>,
) -> Result<Json<ServiceResponse<SearchResponse>>, AppError> {
    require_non_empty("keywords", &request.keywords)?;

    let users = search_users(&state.catalog, &request.keywords, request.search_type);
    debug!(
        keywords = request.keywords.len(),
        hits = users.len(),
        "keyword search completed"
    );

    Ok(ServiceResponse::ok(
        SKILL_SWAPPER_SEARCH,
        SearchResponse {
            search_keywords: request.keywords,
            search_type: request.search_type,
            total_matches: users.len(),
            total_users_searched: state.catalog.users().len(),
            users,
        },
    ))
}

/// GET /api/browse-users?search=&sort_by=
pub async fn handle_browse_users(
    State(state): State<AppState>,
    Query(params): Query<BrowseParams>,
) -> Result<Json<ServiceResponse<BrowseResponse>>, AppError> {
    let sort_by = match params.sort_by.as_deref() {
        Some(value) => value.parse::<SortBy>().map_err(AppError::Validation)?,
        None => SortBy::default(),
    };
    let search = params.search.as_deref().filter(|s| !s.trim().is_empty());

    let users = browse_users(&state.catalog, search, sort_by);

    Ok(ServiceResponse::ok(
        SKILL_SWAPPER_BROWSE,
        BrowseResponse {
            total_users: users.len(),
            users,
            search_applied: search.is_some(),
            sort_by,
        },
    ))
}
