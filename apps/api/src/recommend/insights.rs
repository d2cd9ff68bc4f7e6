//! Skills insights: where a user's skills sit in the category table and which career
//! paths they already partly cover.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::scoring::coverage_percentage;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub skills: Vec<String>,
    pub count: usize,
    pub total_in_category: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerFit {
    pub career: String,
    pub coverage_percentage: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillsInsights {
    pub skill_categories: BTreeMap<String, CategoryBreakdown>,
    pub potential_careers: Vec<CareerFit>,
    pub total_skills: usize,
    pub categories_covered: usize,
}

const TOP_CAREERS: usize = 5;

pub fn analyze_skills(catalog: &Catalog, current_skills: &[String]) -> SkillsInsights {
    let mut skill_categories = BTreeMap::new();
    for category in catalog.categories() {
        let matching: Vec<String> = current_skills
            .iter()
            .filter(|s| category.skills.contains(s))
            .cloned()
            .collect();
        if matching.is_empty() {
            continue;
        }
        skill_categories.insert(
            category.name.clone(),
            CategoryBreakdown {
                count: matching.len(),
                skills: matching,
                total_in_category: category.skills.len(),
            },
        );
    }

    let mut potential_careers: Vec<CareerFit> = catalog
        .career_paths()
        .iter()
        .filter_map(|path| {
            let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = path
                .required_skills
                .iter()
                .cloned()
                .partition(|s| current_skills.contains(s));
            if matching_skills.is_empty() {
                return None;
            }
            Some(CareerFit {
                career: path.name.clone(),
                coverage_percentage: coverage_percentage(
                    matching_skills.len(),
                    path.required_skills.len(),
                ),
                matching_skills,
                missing_skills,
            })
        })
        .collect();

    // Stable: equal coverage keeps catalog order
    potential_careers.sort_by(|a, b| {
        b.coverage_percentage
            .partial_cmp(&a.coverage_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    potential_careers.truncate(TOP_CAREERS);

    SkillsInsights {
        categories_covered: skill_categories.len(),
        skill_categories,
        potential_careers,
        total_skills: current_skills.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{builtin, career, category};

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_category_breakdown() {
        let catalog = Catalog::new(
            vec![],
            vec![
                category("Web", &["HTML", "CSS", "React"]),
                category("Data", &["Python"]),
            ],
            vec![],
            vec![],
            vec![],
        )
        .unwrap();
        let insights = analyze_skills(&catalog, &skills(&["CSS", "HTML", "Cobol"]));

        assert_eq!(insights.categories_covered, 1);
        assert_eq!(insights.total_skills, 3);
        let web = &insights.skill_categories["Web"];
        assert_eq!(web.skills, skills(&["CSS", "HTML"]));
        assert_eq!(web.count, 2);
        assert_eq!(web.total_in_category, 3);
    }

    #[test]
    fn test_careers_sorted_by_coverage() {
        let catalog = Catalog::new(
            vec![],
            vec![],
            vec![
                career("A", &["Rust", "Go", "C", "Zig"]),
                career("B", &["Rust", "Go"]),
                career("C", &["Java"]),
            ],
            vec![],
            vec![],
        )
        .unwrap();
        let insights = analyze_skills(&catalog, &skills(&["Rust"]));

        let names: Vec<&str> = insights.potential_careers.iter().map(|c| c.career.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(insights.potential_careers[0].coverage_percentage, 50.0);
        assert_eq!(insights.potential_careers[1].missing_skills, skills(&["Go", "C", "Zig"]));
    }

    #[test]
    fn test_at_most_five_careers() {
        let insights = analyze_skills(&builtin(), &skills(&["Python", "SQL", "Git", "HTML", "Docker"]));
        assert!(insights.potential_careers.len() <= 5);
        assert!(!insights.potential_careers.is_empty());
    }
}
