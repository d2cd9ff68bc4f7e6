// Skill Gap Analyzer: readiness against role requirements, role comparison, overview.

pub mod analyzer;
pub mod comparison;
pub mod handlers;
