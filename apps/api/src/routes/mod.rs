pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gaps::handlers as gaps;
use crate::matching::handlers as matching;
use crate::recommend::handlers as recommend;
use crate::state::AppState;
use crate::swapper::handlers as swapper;
use crate::unified::handlers as unified;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/status", get(unified::handle_status))
        // Skill Matcher
        .route("/api/matches", post(matching::handle_matches))
        .route("/api/users", get(matching::handle_list_users))
        .route("/api/user/:id", get(matching::handle_get_user))
        .route("/api/add-user", post(matching::handle_add_user))
        // Skill Recommender
        .route("/api/recommendations", post(recommend::handle_recommendations))
        .route("/api/categories", get(recommend::handle_categories))
        .route("/api/career-paths", get(recommend::handle_career_paths))
        .route("/api/career-path/*name", get(recommend::handle_career_path))
        .route("/api/trending-skills", get(recommend::handle_trending))
        .route("/api/skills-analysis", post(recommend::handle_skills_analysis))
        .route("/api/learning-path", post(recommend::handle_learning_path))
        // Skill Gap Analyzer
        .route("/api/analyze", post(gaps::handle_analyze))
        .route("/api/roles", get(gaps::handle_roles))
        .route("/api/role/*name", get(gaps::handle_role))
        .route("/api/compare-roles", post(gaps::handle_compare_roles))
        .route("/api/skills-overview", post(gaps::handle_skills_overview))
        // Skill Swapper
        .route("/api/search-users", post(swapper::handle_search_users))
        .route("/api/browse-users", get(swapper::handle_browse_users))
        // Unified
        .route(
            "/api/comprehensive-analysis",
            post(unified::handle_comprehensive_analysis),
        )
        .route("/api/data-summary", get(unified::handle_data_summary))
        .with_state(state)
}
