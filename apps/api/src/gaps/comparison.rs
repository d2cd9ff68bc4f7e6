//! Aggregations over `analyze_gaps`: side-by-side role comparison and a demand overview
//! across every known role.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::gaps::analyzer::{analyze_gaps, GapAnalysis, ReadinessLevel};

#[derive(Debug, Clone, Serialize)]
pub struct RoleComparison {
    pub role: String,
    pub readiness: String,
    pub readiness_level: ReadinessLevel,
    pub critical_gaps_count: usize,
    pub matching_skills_count: usize,
    pub in_database: bool,
    pub analysis: GapAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    pub demand: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleReadiness {
    pub role: String,
    pub readiness: String,
    pub readiness_level: ReadinessLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillsOverview {
    pub total_skills: usize,
    pub skill_demand: Vec<SkillDemand>,
    pub best_matching_roles: Vec<RoleReadiness>,
    pub role_analyses: BTreeMap<String, GapAnalysis>,
}

const TOP_ROLES: usize = 5;

/// Analyzes each requested role once. Roles in the requirement table come first, most
/// ready first; roles measured by a fallback analysis follow in the same order. Equal
/// readiness keeps request order.
pub fn compare_roles(catalog: &Catalog, current_skills: &[String], roles: &[String]) -> Vec<RoleComparison> {
    let mut comparisons: Vec<RoleComparison> = roles
        .iter()
        .map(|role| {
            let analysis = analyze_gaps(catalog, current_skills, role);
            RoleComparison {
                role: role.clone(),
                readiness: analysis.overall_readiness.clone(),
                readiness_level: analysis.readiness_level,
                critical_gaps_count: analysis.critical_gaps.len(),
                matching_skills_count: analysis.matching_skills.len(),
                in_database: catalog.role(role).is_some(),
                analysis,
            }
        })
        .collect();

    comparisons.sort_by(|a, b| {
        b.in_database
            .cmp(&a.in_database)
            .then_with(|| b.analysis.readiness_score.cmp(&a.analysis.readiness_score))
    });
    comparisons
}

/// Readiness for every known role plus how much the roles ask for each held skill:
/// +3 per role listing it as essential, +2 as preferred, +1 as nice-to-have.
pub fn skills_overview(catalog: &Catalog, current_skills: &[String]) -> SkillsOverview {
    let mut distinct: Vec<&String> = Vec::new();
    for skill in current_skills {
        if !distinct.contains(&skill) {
            distinct.push(skill);
        }
    }

    let mut role_analyses = BTreeMap::new();
    let mut ranked: Vec<(u32, RoleReadiness)> = Vec::new();
    let mut skill_demand: Vec<SkillDemand> = Vec::new();

    for role in catalog.roles() {
        let analysis = analyze_gaps(catalog, current_skills, &role.name);

        for skill in &distinct {
            let weight = if role.essential.contains(skill) {
                3
            } else if role.preferred.contains(skill) {
                2
            } else if role.nice_to_have.contains(skill) {
                1
            } else {
                continue;
            };
            match skill_demand.iter_mut().find(|d| &d.skill == *skill) {
                Some(entry) => entry.demand += weight,
                None => skill_demand.push(SkillDemand {
                    skill: (*skill).clone(),
                    demand: weight,
                }),
            }
        }

        ranked.push((
            analysis.readiness_score,
            RoleReadiness {
                role: role.name.clone(),
                readiness: analysis.overall_readiness.clone(),
                readiness_level: analysis.readiness_level,
            },
        ));
        role_analyses.insert(role.name.clone(), analysis);
    }

    skill_demand.sort_by(|a, b| b.demand.cmp(&a.demand));
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    SkillsOverview {
        total_skills: current_skills.len(),
        skill_demand,
        best_matching_roles: ranked
            .into_iter()
            .take(TOP_ROLES)
            .map(|(_, readiness)| readiness)
            .collect(),
        role_analyses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::builtin;
    use crate::models::role::RoleRequirement;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![],
            vec![],
            vec![],
            vec![],
            vec![
                RoleRequirement::new("Frontend", &["HTML", "CSS"], &["React"], &[]),
                RoleRequirement::new("Backend", &["SQL", "Go"], &["Docker"], &["CSS"]),
                RoleRequirement::new("Designer", &["Figma"], &[], &["HTML"]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_compare_sorts_by_readiness() {
        let comparisons = compare_roles(
            &catalog(),
            &skills(&["HTML", "CSS"]),
            &skills(&["Backend", "Frontend", "Astronaut"]),
        );
        assert_eq!(comparisons[0].role, "Frontend");
        assert_eq!(comparisons[0].readiness, "75%");
        assert!(comparisons[0].in_database);
        assert_eq!(comparisons[0].critical_gaps_count, 0);
        let astronaut = comparisons.iter().find(|c| c.role == "Astronaut").unwrap();
        assert!(!astronaut.in_database);
    }

    #[test]
    fn test_fallback_roles_never_lead() {
        let comparisons = compare_roles(
            &builtin(),
            &skills(&["Python", "SQL"]),
            &skills(&["Data Analyst", "Frontend Developer", "Astronaut"]),
        );
        let roles: Vec<&str> = comparisons.iter().map(|c| c.role.as_str()).collect();
        assert_eq!(roles, vec!["Data Analyst", "Frontend Developer", "Astronaut"]);
        assert!(!comparisons[2].in_database);
    }

    #[test]
    fn test_compare_keeps_request_order_on_ties() {
        let comparisons = compare_roles(&catalog(), &skills(&["Rust"]), &skills(&["Backend", "Frontend"]));
        let roles: Vec<&str> = comparisons.iter().map(|c| c.role.as_str()).collect();
        assert_eq!(roles, vec!["Backend", "Frontend"]);
    }

    #[test]
    fn test_skill_demand_weights() {
        let overview = skills_overview(&catalog(), &skills(&["CSS", "HTML", "Rust", "CSS"]));
        // CSS: essential in Frontend (3) + nice in Backend (1); HTML: 3 + 1
        assert_eq!(
            overview.skill_demand,
            vec![
                SkillDemand { skill: "CSS".into(), demand: 4 },
                SkillDemand { skill: "HTML".into(), demand: 4 },
            ]
        );
        assert_eq!(overview.total_skills, 4);
        assert_eq!(overview.role_analyses.len(), 3);
        assert_eq!(overview.best_matching_roles[0].role, "Frontend");
    }

    #[test]
    fn test_overview_lists_at_most_five_roles() {
        let overview = skills_overview(&builtin(), &skills(&["Python", "SQL"]));
        assert_eq!(overview.best_matching_roles.len(), 5);
        assert_eq!(overview.role_analyses.len(), builtin().roles().len());
    }

    #[test]
    fn test_overview_is_idempotent() {
        let current = skills(&["Python", "Docker"]);
        let first = serde_json::to_value(skills_overview(&builtin(), &current)).unwrap();
        let second = serde_json::to_value(skills_overview(&builtin(), &current)).unwrap();
        assert_eq!(first, second);
    }
}
