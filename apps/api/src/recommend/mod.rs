// Skill Recommender: prioritised recommendations, learning paths, skills insights.
// Pure functions over the catalog; no I/O.

pub mod handlers;
pub mod insights;
pub mod learning_path;
pub mod recommender;
