//! Read-only descriptions of the service: what data is loaded and which endpoints exist.

use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Serialize)]
pub struct UserCount {
    pub count: usize,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NamedGroup {
    pub count: usize,
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TrendingSummary {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DataSummary {
    pub users: UserCount,
    pub skill_categories: NamedGroup,
    pub career_paths: NamedGroup,
    pub job_roles: NamedGroup,
    pub trending_skills: TrendingSummary,
}

impl NamedGroup {
    fn from_names<'a>(names: impl Iterator<Item = &'a String>) -> Self {
        let names: Vec<String> = names.cloned().collect();
        Self {
            count: names.len(),
            names,
        }
    }
}

/// Counts and names for each collection in the catalog, in catalog order.
pub fn data_summary(catalog: &Catalog) -> DataSummary {
    DataSummary {
        users: UserCount {
            count: catalog.users().len(),
            description: "Users available for skill matching",
        },
        skill_categories: NamedGroup::from_names(catalog.categories().iter().map(|c| &c.name)),
        career_paths: NamedGroup::from_names(catalog.career_paths().iter().map(|p| &p.name)),
        job_roles: NamedGroup::from_names(catalog.roles().iter().map(|r| &r.name)),
        trending_skills: TrendingSummary {
            categories: catalog.trending().iter().map(|t| t.category.clone()).collect(),
        },
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [&'static str],
}

pub const SERVICES: &[ServiceInfo] = &[
    ServiceInfo {
        name: "skill_matching",
        description: "Find users with complementary skills",
        endpoints: &["/api/matches", "/api/users", "/api/user/:id", "/api/add-user"],
    },
    ServiceInfo {
        name: "skill_recommendations",
        description: "Get personalized skill recommendations and learning paths",
        endpoints: &[
            "/api/recommendations",
            "/api/categories",
            "/api/career-paths",
            "/api/career-path/*name",
            "/api/trending-skills",
            "/api/skills-analysis",
            "/api/learning-path",
        ],
    },
    ServiceInfo {
        name: "skill_gap_analysis",
        description: "Analyze skill gaps for any role",
        endpoints: &[
            "/api/analyze",
            "/api/roles",
            "/api/role/*name",
            "/api/compare-roles",
            "/api/skills-overview",
        ],
    },
    ServiceInfo {
        name: "skill_swapper",
        description: "Keyword-based user search and ranking",
        endpoints: &["/api/search-users", "/api/browse-users"],
    },
    ServiceInfo {
        name: "unified",
        description: "Cross-service analysis and service metadata",
        endpoints: &[
            "/health",
            "/api/status",
            "/api/comprehensive-analysis",
            "/api/data-summary",
        ],
    },
];

pub fn total_endpoints() -> usize {
    SERVICES.iter().map(|s| s.endpoints.len()).sum()
}
