//! Skill Matcher: ranks every stored user by how well they complement the caller.
//!
//! Primary: `ComplementaryMatcher` (exact skill overlap in both directions).
//! Fallback: `CategoryMatcher` (case-insensitive substring and shared-category overlap),
//! used when the primary finds nobody.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::user::User;
use crate::scoring::round1;
use crate::strategy::{run_with_fallback, Outcome, Strategy};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Caller's side of a match: what they can teach and what they want to learn.
#[derive(Debug, Clone, Copy)]
pub struct MatchQuery<'a> {
    pub user_skills: &'a [String],
    pub desired_skills: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub user_id: u32,
    pub match_score: f64,
    pub reasons: Vec<String>,
}

// Complementary weights: teaching what the caller wants counts more than wanting what
// the caller has.
const TEACH_WEIGHT: f64 = 60.0;
const LEARN_WEIGHT: f64 = 40.0;
const MUTUAL_BONUS: f64 = 10.0;

// Loose weights, per related skill or shared category.
const LOOSE_TEACH_POINTS: f64 = 15.0;
const LOOSE_LEARN_POINTS: f64 = 10.0;
const SHARED_CATEGORY_POINTS: f64 = 5.0;

const MAX_SCORE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Matches the caller against every stored user, falling back to loose matching when no
/// candidate overlaps exactly.
pub fn find_matches(catalog: &Catalog, query: MatchQuery<'_>) -> Outcome<Vec<MatchResult>> {
    run_with_fallback(&ComplementaryMatcher, &CategoryMatcher, catalog, &query)
}

// ────────────────────────────────────────────────────────────────────────────
// ComplementaryMatcher (primary)
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm, per candidate:
/// 1. teaches = candidate.skills ∩ desired_skills
/// 2. learns  = candidate.skills_wanted ∩ user_skills
/// 3. score = 60·|teaches|/|desired| + 40·|learns|/|user_skills| (+10 if both non-empty),
///    capped at 100
///
/// Candidates scoring 0 are dropped.
pub struct ComplementaryMatcher;

impl<'a> Strategy<MatchQuery<'a>> for ComplementaryMatcher {
    type Output = Vec<MatchResult>;

    fn label(&self) -> &'static str {
        "complementary"
    }

    fn apply(&self, catalog: &Catalog, query: &MatchQuery<'a>) -> Vec<MatchResult> {
        let desired: HashSet<&str> = query.desired_skills.iter().map(String::as_str).collect();
        let offered: HashSet<&str> = query.user_skills.iter().map(String::as_str).collect();

        let mut results: Vec<MatchResult> = catalog
            .users()
            .iter()
            .filter_map(|candidate| complementary_match(candidate, &desired, &offered))
            .collect();

        sort_results(&mut results);
        results
    }
}

fn complementary_match(
    candidate: &User,
    desired: &HashSet<&str>,
    offered: &HashSet<&str>,
) -> Option<MatchResult> {
    let teaches: Vec<&String> = candidate
        .skills
        .iter()
        .filter(|s| desired.contains(s.as_str()))
        .collect();
    let learns: Vec<&String> = candidate
        .skills_wanted
        .iter()
        .filter(|s| offered.contains(s.as_str()))
        .collect();

    if teaches.is_empty() && learns.is_empty() {
        return None;
    }

    let teach_ratio = ratio(teaches.len(), desired.len());
    let learn_ratio = ratio(learns.len(), offered.len());
    let mut score = TEACH_WEIGHT * teach_ratio + LEARN_WEIGHT * learn_ratio;

    let mut reasons: Vec<String> = teaches
        .iter()
        .map(|s| format!("has {s} which you want"))
        .chain(learns.iter().map(|s| format!("wants {s} which you have")))
        .collect();

    if !teaches.is_empty() && !learns.is_empty() {
        score += MUTUAL_BONUS;
        reasons.push("mutual skill exchange possible".to_string());
    }

    Some(MatchResult {
        user_id: candidate.id,
        match_score: round1(score.min(MAX_SCORE)),
        reasons,
    })
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CategoryMatcher (fallback)
// ────────────────────────────────────────────────────────────────────────────

/// Loose matching that always ranks every candidate:
/// - +15 per candidate skill textually related to a desired skill (case-insensitive,
///   either string containing the other)
/// - +10 per candidate wanted skill textually related to one of the caller's skills
/// - +5 per catalog category shared between the candidate's skills and the desired skills
///
/// Candidates without any signal stay in the list at 0.
pub struct CategoryMatcher;

impl<'a> Strategy<MatchQuery<'a>> for CategoryMatcher {
    type Output = Vec<MatchResult>;

    fn label(&self) -> &'static str {
        "category"
    }

    fn apply(&self, catalog: &Catalog, query: &MatchQuery<'a>) -> Vec<MatchResult> {
        let desired = lowered(query.desired_skills);
        let offered = lowered(query.user_skills);
        let desired_categories: Vec<&str> = query
            .desired_skills
            .iter()
            .filter_map(|s| catalog.category_of(s))
            .collect();

        let mut results: Vec<MatchResult> = catalog
            .users()
            .iter()
            .map(|candidate| loose_match(catalog, candidate, &desired, &offered, &desired_categories))
            .collect();

        sort_results(&mut results);
        results
    }
}

fn loose_match(
    catalog: &Catalog,
    candidate: &User,
    desired: &[(String, &str)],
    offered: &[(String, &str)],
    desired_categories: &[&str],
) -> MatchResult {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    for skill in &candidate.skills {
        if let Some(wanted) = first_related(skill, desired) {
            score += LOOSE_TEACH_POINTS;
            reasons.push(format!("has {skill}, related to {wanted} you want"));
        }
    }

    for skill in &candidate.skills_wanted {
        if let Some(have) = first_related(skill, offered) {
            score += LOOSE_LEARN_POINTS;
            reasons.push(format!("wants {skill}, related to {have} you have"));
        }
    }

    let mut shared: Vec<&str> = Vec::new();
    for skill in &candidate.skills {
        if let Some(category) = catalog.category_of(skill) {
            if desired_categories.contains(&category) && !shared.contains(&category) {
                shared.push(category);
            }
        }
    }
    for category in shared {
        score += SHARED_CATEGORY_POINTS;
        reasons.push(format!("teaches {category} skills you're interested in"));
    }

    if reasons.is_empty() {
        reasons.push("open to skill exchange".to_string());
    }

    MatchResult {
        user_id: candidate.id,
        match_score: round1(f64::min(score, MAX_SCORE)),
        reasons,
    }
}

/// Pairs each skill with its lower-cased form, dropping blank entries.
fn lowered(skills: &[String]) -> Vec<(String, &str)> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| (s.to_lowercase(), s))
        .collect()
}

fn first_related<'a>(skill: &str, others: &[(String, &'a str)]) -> Option<&'a str> {
    let skill_lower = skill.to_lowercase();
    if skill_lower.is_empty() {
        return None;
    }
    others
        .iter()
        .find(|(lower, _)| skill_lower.contains(lower.as_str()) || lower.contains(&skill_lower))
        .map(|(_, original)| *original)
}

/// Score descending, then user id ascending.
fn sort_results(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.user_id.cmp(&b.user_id))
    });
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::category;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn catalog(users: Vec<User>) -> Catalog {
        Catalog::new(
            users,
            vec![
                category("Web", &["React", "Vue.js", "CSS"]),
                category("Data", &["Python", "Pandas"]),
            ],
            vec![],
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn run(catalog: &Catalog, have: &[&str], want: &[&str]) -> Outcome<Vec<MatchResult>> {
        let user_skills = skills(have);
        let desired_skills = skills(want);
        find_matches(
            catalog,
            MatchQuery {
                user_skills: &user_skills,
                desired_skills: &desired_skills,
            },
        )
    }

    #[test]
    fn test_mutual_match_scores_highest() {
        let catalog = catalog(vec![
            User::new(1, "Tutor Only", &["React"], &["Go"]),
            User::new(2, "Mutual", &["React"], &["Python"]),
            User::new(3, "Learner Only", &["Java"], &["Python"]),
        ]);
        let outcome = run(&catalog, &["Python"], &["React"]);

        assert_eq!(outcome.strategy, "complementary");
        assert!(!outcome.fell_back);
        let ids: Vec<u32> = outcome.output.iter().map(|m| m.user_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(outcome.output[0].match_score, 100.0);
        assert_eq!(outcome.output[1].match_score, 60.0);
        assert_eq!(outcome.output[2].match_score, 40.0);
    }

    #[test]
    fn test_reasons_name_both_directions() {
        let catalog = catalog(vec![User::new(5, "Bob", &["React"], &["Python"])]);
        let outcome = run(&catalog, &["Python"], &["React"]);
        let reasons = &outcome.output[0].reasons;
        assert!(reasons.contains(&"has React which you want".to_string()));
        assert!(reasons.contains(&"wants Python which you have".to_string()));
        assert!(reasons.contains(&"mutual skill exchange possible".to_string()));
    }

    #[test]
    fn test_partial_teach_ratio() {
        let catalog = catalog(vec![User::new(1, "Half", &["React"], &[])]);
        let outcome = run(&catalog, &["Python"], &["React", "CSS"]);
        assert_eq!(outcome.output[0].match_score, 30.0);
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let catalog = catalog(vec![
            User::new(9, "Later", &["React"], &[]),
            User::new(3, "Earlier", &["React"], &[]),
        ]);
        let outcome = run(&catalog, &["Python"], &["React"]);
        let ids: Vec<u32> = outcome.output.iter().map(|m| m.user_id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn test_case_mismatch_falls_back_to_loose_matching() {
        let catalog = catalog(vec![
            User::new(1, "Bob", &["React"], &["Python"]),
            User::new(2, "Nobody", &["Welding"], &["Knitting"]),
        ]);
        let outcome = run(&catalog, &["python"], &["react"]);

        assert!(outcome.fell_back);
        assert_eq!(outcome.strategy, "category");
        assert_eq!(outcome.output.len(), 2);
        assert_eq!(outcome.output[0].user_id, 1);
        assert_eq!(outcome.output[0].match_score, 25.0);
        assert_eq!(outcome.output[1].match_score, 0.0);
        assert_eq!(outcome.output[1].reasons, vec!["open to skill exchange".to_string()]);
    }

    #[test]
    fn test_fallback_uses_shared_categories() {
        let catalog = catalog(vec![User::new(1, "Vue Dev", &["Vue.js"], &[])]);
        let outcome = run(&catalog, &["Go"], &["React"]);

        assert!(outcome.fell_back);
        assert_eq!(outcome.output[0].match_score, 5.0);
        assert_eq!(
            outcome.output[0].reasons,
            vec!["teaches Web skills you're interested in".to_string()]
        );
    }

    #[test]
    fn test_empty_inputs_still_rank_candidates() {
        let catalog = catalog(vec![
            User::new(2, "B", &["React"], &[]),
            User::new(1, "A", &["CSS"], &[]),
        ]);
        let outcome = run(&catalog, &[], &[]);
        assert!(outcome.fell_back);
        let ids: Vec<u32> = outcome.output.iter().map(|m| m.user_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_loose_score_is_capped() {
        let many: Vec<&str> = vec!["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"];
        let catalog = catalog(vec![User::new(1, "Many", &many, &[])]);
        let outcome = run(&catalog, &["zzz"], &["a"]);
        assert_eq!(outcome.output[0].match_score, 100.0);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let catalog = catalog(vec![
            User::new(1, "Bob", &["React"], &["Python"]),
            User::new(2, "Cat", &["CSS"], &["Python"]),
        ]);
        assert_eq!(
            run(&catalog, &["Python"], &["React"]),
            run(&catalog, &["Python"], &["React"])
        );
    }
}
