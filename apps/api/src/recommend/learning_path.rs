use serde::Serialize;

use crate::recommend::recommender::{Priority, Recommendation, RecommendationSet};

#[derive(Debug, Clone, Serialize)]
pub struct LearningPhase {
    pub phase: &'static str,
    pub skills: Vec<Recommendation>,
    pub estimated_time: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningPath {
    pub phases: Vec<LearningPhase>,
    pub total_estimated_time: &'static str,
    pub recommendations: RecommendationSet,
}

/// (tier, phase name, max skills, duration)
const PHASES: [(Priority, &str, usize, &str); 3] = [
    (Priority::High, "Phase 1: Foundation", 3, "3-6 months"),
    (Priority::Medium, "Phase 2: Specialization", 3, "4-8 months"),
    (Priority::Low, "Phase 3: Advanced", 2, "2-4 months"),
];

const TOTAL_ESTIMATED_TIME: &str = "9-18 months";

/// Buckets recommendations into three phases by priority, keeping list order inside a
/// phase.
pub fn derive_learning_path(recommendations: RecommendationSet) -> LearningPath {
    let phases = PHASES
        .iter()
        .map(|&(priority, phase, limit, estimated_time)| LearningPhase {
            phase,
            skills: recommendations
                .recommendations
                .iter()
                .filter(|r| r.priority == priority)
                .take(limit)
                .cloned()
                .collect(),
            estimated_time,
        })
        .collect();

    LearningPath {
        phases,
        total_estimated_time: TOTAL_ESTIMATED_TIME,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::builtin;
    use crate::recommend::recommender::{recommend, ExperienceLevel, RecommendQuery};

    fn rec(skill: &str, priority: Priority) -> Recommendation {
        Recommendation {
            skill: skill.to_string(),
            priority,
            category: None,
            reason: String::new(),
        }
    }

    fn set(recommendations: Vec<Recommendation>) -> RecommendationSet {
        RecommendationSet {
            recommendations,
            career_goal: None,
            source: "career_path",
            coverage_percentage: None,
            message: String::new(),
        }
    }

    #[test]
    fn test_phases_are_capped() {
        let mut recs = Vec::new();
        for i in 0..5 {
            recs.push(rec(&format!("high{i}"), Priority::High));
            recs.push(rec(&format!("medium{i}"), Priority::Medium));
            recs.push(rec(&format!("low{i}"), Priority::Low));
        }
        let path = derive_learning_path(set(recs));

        let sizes: Vec<usize> = path.phases.iter().map(|p| p.skills.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2]);
        assert_eq!(path.phases[0].skills[0].skill, "high0");
        assert_eq!(path.phases[2].skills[1].skill, "low1");
        assert_eq!(path.total_estimated_time, "9-18 months");
        assert_eq!(path.recommendations.recommendations.len(), 15);
    }

    #[test]
    fn test_phase_names_and_durations() {
        let path = derive_learning_path(set(vec![]));
        let names: Vec<&str> = path.phases.iter().map(|p| p.phase).collect();
        assert_eq!(
            names,
            vec!["Phase 1: Foundation", "Phase 2: Specialization", "Phase 3: Advanced"]
        );
        let times: Vec<&str> = path.phases.iter().map(|p| p.estimated_time).collect();
        assert_eq!(times, vec!["3-6 months", "4-8 months", "2-4 months"]);
        assert!(path.phases.iter().all(|p| p.skills.is_empty()));
    }

    #[test]
    fn test_full_stack_learning_path_has_three_capped_phases() {
        let current = vec!["JavaScript".to_string(), "React".to_string()];
        let recommendations = recommend(
            &builtin(),
            RecommendQuery {
                current_skills: &current,
                career_goal: Some("Full Stack Developer"),
                level: ExperienceLevel::Intermediate,
            },
        );
        let path = derive_learning_path(recommendations);

        assert_eq!(path.phases.len(), 3);
        assert!(path.phases[0].skills.len() <= 3);
        assert!(path.phases[1].skills.len() <= 3);
        assert!(path.phases[2].skills.len() <= 2);
        assert!(path.phases[0].skills.iter().all(|r| r.priority == Priority::High));
        assert!(path.phases[2].skills.iter().all(|r| r.priority == Priority::Low));
    }
}
