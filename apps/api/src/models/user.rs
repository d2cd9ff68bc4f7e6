use serde::{Deserialize, Serialize};

/// A platform member offering some skills and looking for others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub skills: Vec<String>,
    #[serde(rename = "skillsWanted")]
    pub skills_wanted: Vec<String>,
}

impl User {
    pub fn new(id: u32, name: &str, skills: &[&str], skills_wanted: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            skills_wanted: skills_wanted.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_wanted_skills_in_camel_case() {
        let user = User::new(7, "Ada", &["Rust"], &["Go"]);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["skillsWanted"][0], "Go");
        assert!(json.get("skills_wanted").is_none());
    }
}
