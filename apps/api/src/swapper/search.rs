//! Keyword search over users' skills and wanted skills.
//!
//! Algorithm:
//! 1. Lower-case the keywords once
//! 2. For each user skill (search type `skills`/`both`) and each keyword, a hit is
//!    keyword ⊆ skill or skill ⊆ keyword (case-insensitive) and adds 1.0
//! 3. Same for wanted skills (`wanted`/`both`), adding 0.5
//! 4. Users scoring 0 are dropped; the rest are sorted by raw score, descending (stable)
//! 5. relevance = min(100, score / (|keywords| × (|skills| + |wanted|)) × 100), one decimal

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::user::User;
use crate::scoring::round1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Skills,
    Wanted,
    Both,
}

impl SearchType {
    fn scans_skills(self) -> bool {
        matches!(self, SearchType::Skills | SearchType::Both)
    }

    fn scans_wanted(self) -> bool {
        matches!(self, SearchType::Wanted | SearchType::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: u32,
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "skillsWanted")]
    pub skills_wanted: Vec<String>,
    pub match_score: f64,
    pub relevance_percentage: f64,
    pub matched_skills: Vec<String>,
    pub matched_wanted: Vec<String>,
    pub total_matches: usize,
}

const SKILL_HIT_WEIGHT: f64 = 1.0;
const WANTED_HIT_WEIGHT: f64 = 0.5;

pub fn search_users(catalog: &Catalog, keywords: &[String], search_type: SearchType) -> Vec<SearchResult> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut results: Vec<SearchResult> = catalog
        .users()
        .iter()
        .filter_map(|user| score_user(user, &keywords, search_type))
        .collect();

    results.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results
}

fn score_user(user: &User, keywords: &[String], search_type: SearchType) -> Option<SearchResult> {
    let mut score = 0.0;
    let mut matched_skills: Vec<String> = Vec::new();
    let mut matched_wanted: Vec<String> = Vec::new();

    if search_type.scans_skills() {
        score += scan(&user.skills, keywords, SKILL_HIT_WEIGHT, &mut matched_skills);
    }
    if search_type.scans_wanted() {
        score += scan(&user.skills_wanted, keywords, WANTED_HIT_WEIGHT, &mut matched_wanted);
    }

    if score <= 0.0 {
        return None;
    }

    let possible = keywords.len() * (user.skills.len() + user.skills_wanted.len());
    let relevance = if possible == 0 {
        0.0
    } else {
        (score / possible as f64 * 100.0).min(100.0)
    };

    let mut distinct: Vec<&String> = Vec::new();
    for skill in matched_skills.iter().chain(&matched_wanted) {
        if !distinct.contains(&skill) {
            distinct.push(skill);
        }
    }

    Some(SearchResult {
        id: user.id,
        name: user.name.clone(),
        skills: user.skills.clone(),
        skills_wanted: user.skills_wanted.clone(),
        match_score: score,
        relevance_percentage: round1(relevance),
        total_matches: distinct.len(),
        matched_skills,
        matched_wanted,
    })
}

/// Adds `weight` per (skill, keyword) hit and records each hit skill once.
fn scan(skills: &[String], keywords: &[String], weight: f64, matched: &mut Vec<String>) -> f64 {
    let mut score = 0.0;
    for skill in skills {
        let skill_lower = skill.to_lowercase();
        for keyword in keywords {
            if skill_lower.contains(keyword.as_str()) || keyword.contains(&skill_lower) {
                score += weight;
                if !matched.contains(skill) {
                    matched.push(skill.clone());
                }
            }
        }
    }
    score
}
