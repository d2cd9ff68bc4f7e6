use std::str::FromStr;

use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Name,
    SkillsCount,
    MatchScore,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(SortBy::Name),
            "skills_count" => Ok(SortBy::SkillsCount),
            "match_score" => Ok(SortBy::MatchScore),
            other => Err(format!(
                "sort_by must be one of: name, skills_count, match_score (got '{other}')"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub id: u32,
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "skillsWanted")]
    pub skills_wanted: Vec<String>,
    pub skills_count: usize,
    pub wanted_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

const NAME_HIT: f64 = 2.0;
const SKILL_HIT: f64 = 1.0;
const WANTED_HIT: f64 = 0.5;

/// Lists users, optionally filtered by a case-insensitive term over name, skills and
/// wanted skills. A blank term means no filter. `MatchScore` only applies when a term
/// is given; otherwise results are ordered by name.
pub fn browse_users(catalog: &Catalog, search_term: Option<&str>, sort_by: SortBy) -> Vec<UserSummary> {
    let term = search_term
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let mut users: Vec<UserSummary> = catalog
        .users()
        .iter()
        .filter_map(|user| {
            let relevance_score = match &term {
                Some(term) => {
                    let name_hit = user.name.to_lowercase().contains(term.as_str());
                    let skill_hit = user.skills.iter().any(|s| s.to_lowercase().contains(term.as_str()));
                    let wanted_hit = user
                        .skills_wanted
                        .iter()
                        .any(|s| s.to_lowercase().contains(term.as_str()));
                    if !(name_hit || skill_hit || wanted_hit) {
                        return None;
                    }
                    let mut score = 0.0;
                    if name_hit {
                        score += NAME_HIT;
                    }
                    if skill_hit {
                        score += SKILL_HIT;
                    }
                    if wanted_hit {
                        score += WANTED_HIT;
                    }
                    Some(score)
                }
                None => None,
            };

            Some(UserSummary {
                id: user.id,
                name: user.name.clone(),
                skills: user.skills.clone(),
                skills_wanted: user.skills_wanted.clone(),
                skills_count: user.skills.len(),
                wanted_count: user.skills_wanted.len(),
                relevance_score,
            })
        })
        .collect();

    match sort_by {
        SortBy::SkillsCount => users.sort_by(|a, b| b.skills_count.cmp(&a.skills_count)),
        SortBy::MatchScore if term.is_some() => users.sort_by(|a, b| {
            b.relevance_score
                .unwrap_or(0.0)
                .partial_cmp(&a.relevance_score.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        _ => users.sort_by_key(|u| u.name.to_lowercase()),
    }
    users
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::builtin;
    use crate::models::user::User;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                User::new(1, "zoe", &["Rust"], &["Go"]),
                User::new(2, "Adam Rusty", &["Python", "SQL", "Docker"], &[]),
                User::new(3, "mia", &["Go", "Kotlin"], &["Rust"]),
            ],
            vec![],
            vec![],
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn ids(users: &[UserSummary]) -> Vec<u32> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn test_default_sort_is_case_insensitive_name() {
        let users = browse_users(&catalog(), None, SortBy::Name);
        assert_eq!(ids(&users), vec![2, 3, 1]);
        assert!(users.iter().all(|u| u.relevance_score.is_none()));
    }

    #[test]
    fn test_builtin_names_strictly_ascending() {
        let users = browse_users(&builtin(), None, SortBy::Name);
        let names: Vec<String> = users.iter().map(|u| u.name.to_lowercase()).collect();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sort_by_skills_count() {
        let users = browse_users(&catalog(), None, SortBy::SkillsCount);
        assert_eq!(ids(&users), vec![2, 3, 1]);
        assert_eq!(users[0].skills_count, 3);
    }

    #[test]
    fn test_search_filters_and_scores() {
        let users = browse_users(&catalog(), Some("RUST"), SortBy::MatchScore);
        // Adam: name hit (2); zoe: skill hit (1); mia: wanted hit (0.5)
        assert_eq!(ids(&users), vec![2, 1, 3]);
        assert_eq!(users[0].relevance_score, Some(2.0));
        assert_eq!(users[1].relevance_score, Some(1.0));
        assert_eq!(users[2].relevance_score, Some(0.5));
    }

    #[test]
    fn test_search_excludes_non_matching() {
        let users = browse_users(&catalog(), Some("kotlin"), SortBy::Name);
        assert_eq!(ids(&users), vec![3]);
    }

    #[test]
    fn test_blank_term_is_no_filter() {
        let users = browse_users(&catalog(), Some("  "), SortBy::MatchScore);
        assert_eq!(ids(&users), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_parses() {
        assert_eq!("skills_count".parse::<SortBy>(), Ok(SortBy::SkillsCount));
        assert!("popularity".parse::<SortBy>().is_err());
    }
}
