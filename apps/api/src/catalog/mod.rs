//! Reference Data Store: users, skill categories, career paths, trending skills and
//! role requirements.
//!
//! Built once at startup and shared read-only through `AppState` as `Arc<Catalog>`.
//! Nothing mutates a `Catalog` after `Catalog::new` returns.

mod seed;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::models::role::RoleRequirement;
use crate::models::user::User;

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerPath {
    pub name: String,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendingSkills {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("user id must be positive (user '{0}')")]
    ZeroUserId(String),

    #[error("duplicate user id {0}")]
    DuplicateUserId(u32),

    #[error("duplicate {kind} '{name}'")]
    DuplicateName { kind: &'static str, name: String },
}

#[derive(Debug)]
pub struct Catalog {
    users: Vec<User>,
    user_index: HashMap<u32, usize>,
    categories: Vec<SkillCategory>,
    career_paths: Vec<CareerPath>,
    career_index: HashMap<String, usize>,
    trending: Vec<TrendingSkills>,
    roles: Vec<RoleRequirement>,
    role_index: HashMap<String, usize>,
}

impl Catalog {
    /// Validates and indexes reference data. Fails on a zero or repeated user id, or a
    /// career path / role listed twice.
    pub fn new(
        users: Vec<User>,
        categories: Vec<SkillCategory>,
        career_paths: Vec<CareerPath>,
        trending: Vec<TrendingSkills>,
        roles: Vec<RoleRequirement>,
    ) -> Result<Self, CatalogError> {
        let mut user_index = HashMap::with_capacity(users.len());
        for (pos, user) in users.iter().enumerate() {
            if user.id == 0 {
                return Err(CatalogError::ZeroUserId(user.name.clone()));
            }
            if user_index.insert(user.id, pos).is_some() {
                return Err(CatalogError::DuplicateUserId(user.id));
            }
        }

        let career_index = index_names("career path", career_paths.iter().map(|c| &c.name))?;
        let role_index = index_names("role", roles.iter().map(|r| &r.name))?;

        Ok(Self {
            users,
            user_index,
            categories,
            career_paths,
            career_index,
            trending,
            roles,
            role_index,
        })
    }

    /// The reference data the service ships with.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            seed::users(),
            seed::categories(),
            seed::career_paths(),
            seed::trending(),
            seed::roles(),
        )
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: u32) -> Option<&User> {
        self.user_index.get(&id).map(|&pos| &self.users[pos])
    }

    /// Id the next user would receive: one past the largest id, or 1 for an empty store.
    /// `None` once the largest id is `u32::MAX`.
    pub fn next_user_id(&self) -> Option<u32> {
        match self.users.iter().map(|u| u.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    /// Name of the first category listing `skill`, exact match.
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.skills.iter().any(|s| s == skill))
            .map(|c| c.name.as_str())
    }

    pub fn career_paths(&self) -> &[CareerPath] {
        &self.career_paths
    }

    pub fn career_path(&self, name: &str) -> Option<&CareerPath> {
        self.career_index.get(name).map(|&pos| &self.career_paths[pos])
    }

    pub fn trending(&self) -> &[TrendingSkills] {
        &self.trending
    }

    pub fn roles(&self) -> &[RoleRequirement] {
        &self.roles
    }

    pub fn role(&self, name: &str) -> Option<&RoleRequirement> {
        self.role_index.get(name).map(|&pos| &self.roles[pos])
    }
}

fn index_names<'a>(
    kind: &'static str,
    names: impl Iterator<Item = &'a String>,
) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    for (pos, name) in names.enumerate() {
        if index.insert(name.clone(), pos).is_some() {
            return Err(CatalogError::DuplicateName {
                kind,
                name: name.clone(),
            });
        }
    }
    Ok(index)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    fn users(ids: &[u32]) -> Vec<User> {
        ids.iter()
            .map(|&id| User::new(id, &format!("user{id}"), &["Rust"], &["Go"]))
            .collect()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.users().is_empty());
        assert!(!catalog.roles().is_empty());
        assert!(catalog.career_path("Full Stack Developer").is_some());
    }

    #[test]
    fn test_rejects_duplicate_user_id() {
        let err = Catalog::new(users(&[1, 2, 1]), vec![], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateUserId(1));
    }

    #[test]
    fn test_rejects_zero_user_id() {
        let err = Catalog::new(users(&[0]), vec![], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroUserId(_)));
    }

    #[test]
    fn test_rejects_duplicate_role() {
        let roles = vec![
            RoleRequirement::new("Dev", &["Rust"], &[], &[]),
            RoleRequirement::new("Dev", &["Go"], &[], &[]),
        ];
        let err = Catalog::new(vec![], vec![], vec![], vec![], roles).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { kind: "role", .. }));
    }

    #[test]
    fn test_user_lookup_by_id() {
        let catalog = Catalog::new(users(&[4, 9]), vec![], vec![], vec![], vec![]).unwrap();
        assert_eq!(catalog.user(9).map(|u| u.name.as_str()), Some("user9"));
        assert!(catalog.user(5).is_none());
    }

    #[test]
    fn test_next_user_id() {
        let catalog = Catalog::new(users(&[4, 9, 2]), vec![], vec![], vec![], vec![]).unwrap();
        assert_eq!(catalog.next_user_id(), Some(10));

        let empty = Catalog::new(vec![], vec![], vec![], vec![], vec![]).unwrap();
        assert_eq!(empty.next_user_id(), Some(1));
    }

    #[test]
    fn test_next_user_id_exhausted() {
        let catalog = Catalog::new(users(&[3, u32::MAX]), vec![], vec![], vec![], vec![]).unwrap();
        assert_eq!(catalog.next_user_id(), None);
    }

    #[test]
    fn test_category_of_is_exact() {
        let catalog = Catalog::new(
            vec![],
            vec![category("Web", &["React", "CSS"])],
            vec![career("Frontend", &["React"])],
            vec![trending("Web", &["Svelte"])],
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.category_of("React"), Some("Web"));
        assert_eq!(catalog.category_of("react"), None);
    }
}
