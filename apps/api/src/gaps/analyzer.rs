//! Skill Gap Analyzer: weighted readiness of a skill set against a role's requirements.
//!
//! Primary: `RoleRequirementAnalyzer` (role found in the requirement table).
//! Fallback: `ClosestRoleAnalyzer` (nearest role by name, else the most common essential
//! skills across all roles).

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::role::RoleRequirement;
use crate::scoring::coverage_percentage;
use crate::strategy::{run_with_fallback, Strategy, Usable};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisBasis {
    /// Requested role found in the requirement table.
    RoleRequirements,
    /// Requested role unknown; the closest known role by name was used.
    ClosestRole,
    /// No related role; measured against the most common essential skills.
    CoreSkills,
    /// Primary strategy had nothing to analyze.
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ReadinessLevel {
    #[serde(rename = "Not Ready")]
    NotReady,
    #[serde(rename = "Early Stage")]
    EarlyStage,
    Developing,
    #[serde(rename = "Nearly Ready")]
    NearlyReady,
    Ready,
}

impl ReadinessLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ReadinessLevel::Ready,
            s if s >= 60 => ReadinessLevel::NearlyReady,
            s if s >= 40 => ReadinessLevel::Developing,
            s if s >= 20 => ReadinessLevel::EarlyStage,
            _ => ReadinessLevel::NotReady,
        }
    }
}

/// Per-tier coverage percentages, one decimal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierCoverage {
    pub essential: f64,
    pub preferred: f64,
    pub nice_to_have: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapAnalysis {
    pub target_role: String,
    pub basis: AnalysisBasis,
    /// Role actually analyzed when it differs from `target_role`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_role: Option<String>,
    /// Whole percent with a trailing '%', e.g. "67%".
    pub overall_readiness: String,
    pub readiness_score: u32,
    pub readiness_level: ReadinessLevel,
    pub matching_skills: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub preferred_gaps: Vec<String>,
    pub nice_to_have_gaps: Vec<String>,
    pub coverage: TierCoverage,
    pub recommendations: Vec<String>,
}

impl Usable for GapAnalysis {
    fn is_usable(&self) -> bool {
        self.basis != AnalysisBasis::Unavailable
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GapQuery<'a> {
    pub current_skills: &'a [String],
    pub target_role: &'a str,
}

const ESSENTIAL_WEIGHT: u32 = 3;
const PREFERRED_WEIGHT: u32 = 2;
const NICE_TO_HAVE_WEIGHT: u32 = 1;

const MAX_ESSENTIAL_ADVICE: usize = 3;
const MAX_ADVICE: usize = 5;
const CORE_SKILL_COUNT: usize = 5;

/// Analyzes `current_skills` against `target_role`. Unknown roles never fail; they are
/// analyzed against the closest known role or the core skill set.
pub fn analyze_gaps(catalog: &Catalog, current_skills: &[String], target_role: &str) -> GapAnalysis {
    let query = GapQuery {
        current_skills,
        target_role,
    };
    let outcome = run_with_fallback(&RoleRequirementAnalyzer, &ClosestRoleAnalyzer, catalog, &query);
    if outcome.fell_back {
        tracing::debug!(target_role, basis = ?outcome.output.basis, "role not in requirement table");
    }
    outcome.output
}

/// Scores `current_skills` against one requirement set.
///
/// readiness = (3·essential held + 2·preferred held + nice held)
///           / (3·|essential| + 2·|preferred| + |nice|) × 100, rounded to whole percent.
/// An empty requirement set is 0%.
pub fn evaluate_role(
    role: &RoleRequirement,
    current_skills: &[String],
    target_role: &str,
    basis: AnalysisBasis,
) -> GapAnalysis {
    let held: HashSet<&str> = current_skills.iter().map(String::as_str).collect();
    let split = |tier: &[String]| -> (usize, Vec<String>) {
        let missing: Vec<String> = tier
            .iter()
            .filter(|s| !held.contains(s.as_str()))
            .cloned()
            .collect();
        (tier.len() - missing.len(), missing)
    };

    let (essential_held, critical_gaps) = split(role.essential.as_slice());
    let (preferred_held, preferred_gaps) = split(role.preferred.as_slice());
    let (nice_held, nice_to_have_gaps) = split(role.nice_to_have.as_slice());

    let earned = ESSENTIAL_WEIGHT * essential_held as u32
        + PREFERRED_WEIGHT * preferred_held as u32
        + NICE_TO_HAVE_WEIGHT * nice_held as u32;
    let possible = ESSENTIAL_WEIGHT * role.essential.len() as u32
        + PREFERRED_WEIGHT * role.preferred.len() as u32
        + NICE_TO_HAVE_WEIGHT * role.nice_to_have.len() as u32;

    let readiness_score = if possible == 0 {
        0
    } else {
        (earned as f64 / possible as f64 * 100.0).round() as u32
    };

    let matching_skills: Vec<String> = role
        .all_skills()
        .into_iter()
        .filter(|s| held.contains(s))
        .map(str::to_string)
        .collect();

    let recommendations = build_recommendations(&role.name, &critical_gaps, &preferred_gaps);

    GapAnalysis {
        target_role: target_role.to_string(),
        basis,
        reference_role: (role.name != target_role).then(|| role.name.clone()),
        overall_readiness: format!("{readiness_score}%"),
        readiness_score,
        readiness_level: ReadinessLevel::from_score(readiness_score),
        matching_skills,
        coverage: TierCoverage {
            essential: coverage_percentage(essential_held, role.essential.len()),
            preferred: coverage_percentage(preferred_held, role.preferred.len()),
            nice_to_have: coverage_percentage(nice_held, role.nice_to_have.len()),
        },
        critical_gaps,
        preferred_gaps,
        nice_to_have_gaps,
        recommendations,
    }
}

fn build_recommendations(role: &str, critical: &[String], preferred: &[String]) -> Vec<String> {
    if critical.is_empty() && preferred.is_empty() {
        return vec![format!("You meet the essential and preferred requirements for {role}")];
    }

    let mut advice: Vec<String> = critical
        .iter()
        .take(MAX_ESSENTIAL_ADVICE)
        .map(|s| format!("Learn {s} (essential)"))
        .collect();
    let room = MAX_ADVICE - advice.len();
    advice.extend(
        preferred
            .iter()
            .take(room)
            .map(|s| format!("Consider learning {s} (preferred)")),
    );
    advice
}

// ────────────────────────────────────────────────────────────────────────────
// RoleRequirementAnalyzer (primary)
// ────────────────────────────────────────────────────────────────────────────

pub struct RoleRequirementAnalyzer;

impl<'a> Strategy<GapQuery<'a>> for RoleRequirementAnalyzer {
    type Output = GapAnalysis;

    fn label(&self) -> &'static str {
        "role_requirements"
    }

    fn apply(&self, catalog: &Catalog, query: &GapQuery<'a>) -> GapAnalysis {
        match catalog.role(query.target_role) {
            Some(role) => evaluate_role(
                role,
                query.current_skills,
                query.target_role,
                AnalysisBasis::RoleRequirements,
            ),
            None => evaluate_role(
                &RoleRequirement::new(query.target_role, &[], &[], &[]),
                query.current_skills,
                query.target_role,
                AnalysisBasis::Unavailable,
            ),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ClosestRoleAnalyzer (fallback)
// ────────────────────────────────────────────────────────────────────────────

/// Picks the known role sharing the most lower-cased name words with the requested one
/// (ties keep catalog order). With no shared word, builds a synthetic "Core Skills" role
/// whose essential list is the skills most often listed as essential across all roles.
/// That readiness can exceed a real role's, so comparisons rank known roles first.
pub struct ClosestRoleAnalyzer;

impl<'a> Strategy<GapQuery<'a>> for ClosestRoleAnalyzer {
    type Output = GapAnalysis;

    fn label(&self) -> &'static str {
        "closest_role"
    }

    fn apply(&self, catalog: &Catalog, query: &GapQuery<'a>) -> GapAnalysis {
        if let Some(role) = closest_role(catalog, query.target_role) {
            return evaluate_role(
                role,
                query.current_skills,
                query.target_role,
                AnalysisBasis::ClosestRole,
            );
        }

        let core = core_skills_role(catalog);
        evaluate_role(
            &core,
            query.current_skills,
            query.target_role,
            AnalysisBasis::CoreSkills,
        )
    }
}

fn name_tokens(name: &str) -> HashSet<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn closest_role<'c>(catalog: &'c Catalog, target: &str) -> Option<&'c RoleRequirement> {
    let wanted = name_tokens(target);
    let mut best: Option<(&RoleRequirement, usize)> = None;
    for role in catalog.roles() {
        let shared = name_tokens(&role.name).intersection(&wanted).count();
        if shared > 0 && best.map_or(true, |(_, top)| shared > top) {
            best = Some((role, shared));
        }
    }
    best.map(|(role, _)| role)
}

fn core_skills_role(catalog: &Catalog) -> RoleRequirement {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for role in catalog.roles() {
        for skill in &role.essential {
            match counts.iter_mut().find(|(s, _)| *s == skill.as_str()) {
                Some((_, count)) => *count += 1,
                None => counts.push((skill.as_str(), 1)),
            }
        }
    }
    // Stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let essential: Vec<&str> = counts
        .into_iter()
        .take(CORE_SKILL_COUNT)
        .map(|(s, _)| s)
        .collect();
    RoleRequirement::new("Core Skills", &essential, &[], &[])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
