//! Skill Recommender: prioritised next skills toward a career goal.
//!
//! Primary: `CareerPathRecommender`, driven by the goal's required-skill list.
//! Fallback: `CategoryRecommender`, driven by the categories the user already works in.
//! The fallback runs when the goal is missing, unknown, or already fully covered.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, SkillCategory};
use crate::scoring::coverage_percentage;
use crate::strategy::{run_with_fallback, Strategy, Usable};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Position cut-offs (as a fraction of the path length) below which a required skill
    /// is High, then Medium. Everything after the second cut is Low.
    fn priority_cuts(self) -> (f64, f64) {
        match self {
            ExperienceLevel::Beginner => (0.5, 0.8),
            ExperienceLevel::Intermediate => (0.34, 0.67),
            ExperienceLevel::Advanced => (0.2, 0.5),
        }
    }

    /// Tiers for (strongest category, other categories, trending) in the fallback.
    fn fallback_tiers(self) -> (Priority, Priority, Priority) {
        match self {
            ExperienceLevel::Beginner => (Priority::High, Priority::Medium, Priority::Medium),
            ExperienceLevel::Intermediate => (Priority::High, Priority::Medium, Priority::Low),
            ExperienceLevel::Advanced => (Priority::Medium, Priority::Low, Priority::Low),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub skill: String,
    pub priority: Priority,
    pub category: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub career_goal: Option<String>,
    /// Which strategy produced the list: "career_path" or "category_heuristic".
    pub source: &'static str,
    /// Share of the goal's required skills already held. Career-path results only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percentage: Option<f64>,
    pub message: String,
}

impl Usable for RecommendationSet {
    fn is_usable(&self) -> bool {
        !self.recommendations.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendQuery<'a> {
    pub current_skills: &'a [String],
    pub career_goal: Option<&'a str>,
    pub level: ExperienceLevel,
}

const TRENDING_LIMIT: usize = 2;
const STRONGEST_CATEGORY_LIMIT: usize = 4;
const OTHER_CATEGORY_LIMIT: usize = 2;
const MAX_RECOMMENDATIONS: usize = 10;

/// Recommends skills for the query. Never fails: an unknown goal degrades to the
/// category heuristic.
pub fn recommend(catalog: &Catalog, query: RecommendQuery<'_>) -> RecommendationSet {
    let outcome = run_with_fallback(&CareerPathRecommender, &CategoryRecommender, catalog, &query);
    if outcome.fell_back {
        tracing::debug!(
            career_goal = query.career_goal.unwrap_or(""),
            "recommendations fell back to category heuristic"
        );
    }
    outcome.output
}

// ────────────────────────────────────────────────────────────────────────────
// CareerPathRecommender (primary)
// ────────────────────────────────────────────────────────────────────────────

pub struct CareerPathRecommender;

impl<'a> Strategy<RecommendQuery<'a>> for CareerPathRecommender {
    type Output = RecommendationSet;

    fn label(&self) -> &'static str {
        "career_path"
    }

    fn apply(&self, catalog: &Catalog, query: &RecommendQuery<'a>) -> RecommendationSet {
        let goal = query.career_goal.map(str::to_string);
        let Some(path) = query.career_goal.and_then(|g| catalog.career_path(g)) else {
            return RecommendationSet {
                recommendations: Vec::new(),
                career_goal: goal,
                source: self.label(),
                coverage_percentage: None,
                message: "Career goal not recognized".to_string(),
            };
        };

        let held: HashSet<&str> = query.current_skills.iter().map(String::as_str).collect();
        let total = path.required_skills.len();
        let (high_cut, medium_cut) = query.level.priority_cuts();

        let mut recommendations = Vec::new();
        for (position, skill) in path.required_skills.iter().enumerate() {
            if held.contains(skill.as_str()) {
                continue;
            }
            let rank = position as f64 / total as f64;
            let (priority, reason) = if rank < high_cut {
                (Priority::High, format!("Core skill for {}", path.name))
            } else if rank < medium_cut {
                (Priority::Medium, format!("Builds on the {} foundation", path.name))
            } else {
                (Priority::Low, format!("Rounds out the {} skill set", path.name))
            };
            recommendations.push(Recommendation {
                skill: skill.clone(),
                priority,
                category: catalog.category_of(skill).map(str::to_string),
                reason,
            });
        }

        if !recommendations.is_empty() {
            let touched = touched_categories(catalog, &held);
            let touched_names: Vec<&str> = touched.iter().map(|(c, _)| c.name.as_str()).collect();
            let trending = trending_picks(catalog, &held, &recommendations, &touched_names, Priority::Low);
            recommendations.extend(trending.into_iter().take(TRENDING_LIMIT));
        }

        let held_required = total
            - path
                .required_skills
                .iter()
                .filter(|s| !held.contains(s.as_str()))
                .count();

        RecommendationSet {
            message: format!(
                "{} skill(s) to learn for {}",
                recommendations.len(),
                path.name
            ),
            recommendations,
            career_goal: goal,
            source: self.label(),
            coverage_percentage: Some(coverage_percentage(held_required, total)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CategoryRecommender (fallback)
// ────────────────────────────────────────────────────────────────────────────

/// Heuristic recommendations without a usable career path:
/// 1. Rank categories by how many of the user's skills they contain
/// 2. Suggest missing skills from the strongest category, then from other touched ones
/// 3. Add trending skills from touched categories
///
/// A user touching no category gets the first skill of every category.
pub struct CategoryRecommender;

impl<'a> Strategy<RecommendQuery<'a>> for CategoryRecommender {
    type Output = RecommendationSet;

    fn label(&self) -> &'static str {
        "category_heuristic"
    }

    fn apply(&self, catalog: &Catalog, query: &RecommendQuery<'a>) -> RecommendationSet {
        let held: HashSet<&str> = query.current_skills.iter().map(String::as_str).collect();
        let (primary_tier, secondary_tier, trending_tier) = query.level.fallback_tiers();
        let touched = touched_categories(catalog, &held);

        let mut recommendations: Vec<Recommendation> = Vec::new();

        if touched.is_empty() {
            for category in catalog.categories() {
                if let Some(skill) = category.skills.iter().find(|s| !held.contains(s.as_str())) {
                    recommendations.push(Recommendation {
                        skill: skill.clone(),
                        priority: primary_tier,
                        category: Some(category.name.clone()),
                        reason: format!("Foundational {} skill", category.name),
                    });
                }
            }
        } else {
            for (index, (category, _)) in touched.iter().enumerate() {
                let (tier, limit, reason) = if index == 0 {
                    (
                        primary_tier,
                        STRONGEST_CATEGORY_LIMIT,
                        format!("Deepens your strongest area ({})", category.name),
                    )
                } else {
                    (
                        secondary_tier,
                        OTHER_CATEGORY_LIMIT,
                        format!("Expands your {} skills", category.name),
                    )
                };
                let picks: Vec<Recommendation> = category
                    .skills
                    .iter()
                    .filter(|s| !held.contains(s.as_str()) && !already_listed(&recommendations, s))
                    .take(limit)
                    .map(|s| Recommendation {
                        skill: s.clone(),
                        priority: tier,
                        category: Some(category.name.clone()),
                        reason: reason.clone(),
                    })
                    .collect();
                recommendations.extend(picks);
            }
        }

        let touched_names: Vec<&str> = if touched.is_empty() {
            catalog.categories().iter().map(|c| c.name.as_str()).collect()
        } else {
            touched.iter().map(|(c, _)| c.name.as_str()).collect()
        };
        let trending = trending_picks(catalog, &held, &recommendations, &touched_names, trending_tier);
        recommendations.extend(trending.into_iter().take(TRENDING_LIMIT));
        recommendations.truncate(MAX_RECOMMENDATIONS);

        let message = match query.career_goal {
            Some(goal) if catalog.career_path(goal).is_some() => {
                format!("You already cover the {goal} path; suggestions follow your strongest skill areas")
            }
            Some(goal) => {
                format!("Career goal '{goal}' not recognized; suggestions follow your current skill areas")
            }
            None => "No career goal given; suggestions follow your current skill areas".to_string(),
        };

        RecommendationSet {
            recommendations,
            career_goal: query.career_goal.map(str::to_string),
            source: self.label(),
            coverage_percentage: None,
            message,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Categories holding at least one of the user's skills, most skills first. Ties keep
/// catalog order.
fn touched_categories<'c>(
    catalog: &'c Catalog,
    held: &HashSet<&str>,
) -> Vec<(&'c SkillCategory, usize)> {
    let mut touched: Vec<(&SkillCategory, usize)> = catalog
        .categories()
        .iter()
        .map(|c| (c, c.skills.iter().filter(|s| held.contains(s.as_str())).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    touched.sort_by(|a, b| b.1.cmp(&a.1));
    touched
}

fn trending_picks(
    catalog: &Catalog,
    held: &HashSet<&str>,
    existing: &[Recommendation],
    categories: &[&str],
    priority: Priority,
) -> Vec<Recommendation> {
    let mut picks: Vec<Recommendation> = Vec::new();
    for entry in catalog.trending() {
        if !categories.contains(&entry.category.as_str()) {
            continue;
        }
        for skill in &entry.skills {
            if held.contains(skill.as_str())
                || already_listed(existing, skill)
                || already_listed(&picks, skill)
            {
                continue;
            }
            picks.push(Recommendation {
                skill: skill.clone(),
                priority,
                category: Some(entry.category.clone()),
                reason: format!("Trending in {}", entry.category),
            });
        }
    }
    picks
}

fn already_listed(recommendations: &[Recommendation], skill: &str) -> bool {
    recommendations.iter().any(|r| r.skill == skill)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{builtin, career, category, trending};

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(catalog: &Catalog, have: &[&str], goal: Option<&str>, level: ExperienceLevel) -> RecommendationSet {
        let current = skills(have);
        recommend(
            catalog,
            RecommendQuery {
                current_skills: &current,
                career_goal: goal,
                level,
            },
        )
    }

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![],
            vec![
                category("Web", &["HTML", "CSS", "React", "Vue.js"]),
                category("Data", &["Python", "SQL", "Pandas"]),
            ],
            vec![career(
                "Web Dev",
                &["HTML", "CSS", "JavaScript", "React", "Git", "Docker", "SQL", "Redis", "AWS", "GraphQL"],
            )],
            vec![trending("Web", &["Svelte"]), trending("Data", &["Polars"])],
            vec![],
        )
        .unwrap()
    }

    fn priorities_of(set: &RecommendationSet, skill: &str) -> Option<Priority> {
        set.recommendations.iter().find(|r| r.skill == skill).map(|r| r.priority)
    }

    #[test]
    fn test_full_stack_intermediate_end_to_end() {
        let set = run(
            &builtin(),
            &["JavaScript", "React"],
            Some("Full Stack Developer"),
            ExperienceLevel::Intermediate,
        );
        assert_eq!(set.source, "career_path");
        assert!(!set.recommendations.is_empty());
        assert!(set.recommendations.iter().all(|r| matches!(
            r.priority,
            Priority::High | Priority::Medium | Priority::Low
        )));
        assert!(!set.recommendations.iter().any(|r| r.skill == "React"));
        assert_eq!(set.coverage_percentage, Some(20.0));
    }

    #[test]
    fn test_intermediate_tiers_follow_path_position() {
        let set = run(&small_catalog(), &["HTML"], Some("Web Dev"), ExperienceLevel::Intermediate);
        assert_eq!(priorities_of(&set, "CSS"), Some(Priority::High));
        assert_eq!(priorities_of(&set, "Git"), Some(Priority::Medium));
        assert_eq!(priorities_of(&set, "Redis"), Some(Priority::Low));
        assert_eq!(priorities_of(&set, "HTML"), None);
    }

    #[test]
    fn test_beginner_gets_more_high_priority_than_advanced() {
        let catalog = small_catalog();
        let count_high = |level| {
            run(&catalog, &[], Some("Web Dev"), level)
                .recommendations
                .iter()
                .filter(|r| r.priority == Priority::High)
                .count()
        };
        let count_low = |level| {
            run(&catalog, &[], Some("Web Dev"), level)
                .recommendations
                .iter()
                .filter(|r| r.priority == Priority::Low)
                .count()
        };
        assert!(count_high(ExperienceLevel::Beginner) > count_high(ExperienceLevel::Advanced));
        assert!(count_low(ExperienceLevel::Advanced) > count_low(ExperienceLevel::Beginner));
        assert_eq!(count_high(ExperienceLevel::Beginner), 5);
        assert_eq!(count_high(ExperienceLevel::Advanced), 2);
    }

    #[test]
    fn test_trending_appended_for_touched_categories() {
        let set = run(&small_catalog(), &["HTML"], Some("Web Dev"), ExperienceLevel::Intermediate);
        let svelte = set.recommendations.iter().find(|r| r.skill == "Svelte").unwrap();
        assert_eq!(svelte.priority, Priority::Low);
        assert!(!set.recommendations.iter().any(|r| r.skill == "Polars"));
    }

    #[test]
    fn test_unknown_goal_falls_back() {
        let set = run(&small_catalog(), &["Python"], Some("Astronaut"), ExperienceLevel::Intermediate);
        assert_eq!(set.source, "category_heuristic");
        assert!(set.message.contains("Astronaut"));
        assert_eq!(priorities_of(&set, "SQL"), Some(Priority::High));
        assert_eq!(priorities_of(&set, "Polars"), Some(Priority::Low));
        assert!(set.coverage_percentage.is_none());
    }

    #[test]
    fn test_fallback_strongest_category_leads() {
        let set = run(&small_catalog(), &["Python", "SQL", "HTML"], None, ExperienceLevel::Advanced);
        assert_eq!(priorities_of(&set, "Pandas"), Some(Priority::Medium));
        assert_eq!(priorities_of(&set, "CSS"), Some(Priority::Low));
        assert_eq!(set.recommendations[0].skill, "Pandas");
    }

    #[test]
    fn test_fallback_without_known_skills_suggests_foundations() {
        let set = run(&small_catalog(), &["Welding"], None, ExperienceLevel::Beginner);
        assert_eq!(priorities_of(&set, "HTML"), Some(Priority::High));
        assert_eq!(priorities_of(&set, "Python"), Some(Priority::High));
    }

    #[test]
    fn test_completed_path_falls_back() {
        let all = [
            "HTML", "CSS", "JavaScript", "React", "Git", "Docker", "SQL", "Redis", "AWS", "GraphQL",
        ];
        let set = run(&small_catalog(), &all, Some("Web Dev"), ExperienceLevel::Intermediate);
        assert_eq!(set.source, "category_heuristic");
        assert!(set.message.contains("already cover"));
    }

    #[test]
    fn test_experience_level_deserializes_lowercase() {
        let level: ExperienceLevel = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(level, ExperienceLevel::Advanced);
        assert!(serde_json::from_str::<ExperienceLevel>(r#""expert""#).is_err());
        assert_eq!(ExperienceLevel::default(), ExperienceLevel::Intermediate);
    }
}
