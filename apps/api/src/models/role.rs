use serde::{Deserialize, Serialize};

/// Skills a job role asks for, split by how much they matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirement {
    #[serde(skip)]
    pub name: String,
    pub essential: Vec<String>,
    pub preferred: Vec<String>,
    pub nice_to_have: Vec<String>,
}

impl RoleRequirement {
    pub fn new(name: &str, essential: &[&str], preferred: &[&str], nice_to_have: &[&str]) -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            name: name.to_string(),
            essential: owned(essential),
            preferred: owned(preferred),
            nice_to_have: owned(nice_to_have),
        }
    }

    /// Every listed skill once, essential first, then preferred, then nice-to-have.
    pub fn all_skills(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for skill in self
            .essential
            .iter()
            .chain(&self.preferred)
            .chain(&self.nice_to_have)
        {
            if !seen.contains(&skill.as_str()) {
                seen.push(skill.as_str());
            }
        }
        seen
    }
}
