//! Built-in reference tables.

use crate::catalog::{CareerPath, SkillCategory, TrendingSkills};
use crate::models::role::RoleRequirement;
use crate::models::user::User;

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn users() -> Vec<User> {
    vec![
        User::new(1, "Alice Johnson", &["Python", "Machine Learning", "SQL"], &["React", "JavaScript"]),
        User::new(2, "Bob Smith", &["JavaScript", "React", "Node.js"], &["Python", "Data Analysis"]),
        User::new(3, "Carol Davis", &["Java", "Spring Boot", "AWS"], &["Docker", "Kubernetes"]),
        User::new(4, "David Wilson", &["Docker", "Kubernetes", "Linux"], &["Java", "Go"]),
        User::new(5, "Emma Brown", &["Figma", "UI Design", "User Research"], &["CSS", "HTML"]),
        User::new(6, "Frank Miller", &["HTML", "CSS", "JavaScript"], &["Figma", "TypeScript"]),
        User::new(7, "Grace Lee", &["Swift", "iOS Development", "Git"], &["Kotlin", "Flutter"]),
        User::new(8, "Henry Taylor", &["Kotlin", "Android Development", "Firebase"], &["Swift", "React Native"]),
        User::new(9, "Isabel Garcia", &["Data Analysis", "Tableau", "Statistics"], &["Machine Learning", "Python"]),
        User::new(10, "Jack Martinez", &["Go", "PostgreSQL", "REST APIs"], &["Rust", "AWS"]),
        User::new(11, "Karen White", &["TypeScript", "Vue.js", "GraphQL"], &["Node.js", "MongoDB"]),
        User::new(12, "Liam Harris", &["Rust", "C++", "Linux"], &["Machine Learning", "Python"]),
    ]
}

pub fn categories() -> Vec<SkillCategory> {
    let category = |name: &str, skills: &[&str]| SkillCategory {
        name: name.to_string(),
        skills: strings(skills),
    };
    vec![
        category(
            "Programming Languages",
            &["Python", "JavaScript", "TypeScript", "Java", "Go", "Rust", "C++", "Swift", "Kotlin"],
        ),
        category(
            "Web Development",
            &["HTML", "CSS", "React", "Vue.js", "Angular", "Node.js", "REST APIs", "GraphQL", "Spring Boot"],
        ),
        category(
            "Data Science",
            &["Machine Learning", "Data Analysis", "Statistics", "Deep Learning", "TensorFlow", "Pandas", "Tableau"],
        ),
        category(
            "Cloud & DevOps",
            &["AWS", "Docker", "Kubernetes", "Linux", "CI/CD", "Terraform", "Git"],
        ),
        category(
            "Mobile Development",
            &["iOS Development", "Android Development", "React Native", "Flutter", "Firebase"],
        ),
        category(
            "Design",
            &["Figma", "UI Design", "User Research", "Prototyping", "Adobe XD"],
        ),
        category("Databases", &["SQL", "PostgreSQL", "MongoDB", "Redis"]),
    ]
}

pub fn career_paths() -> Vec<CareerPath> {
    let career = |name: &str, skills: &[&str]| CareerPath {
        name: name.to_string(),
        required_skills: strings(skills),
    };
    vec![
        career(
            "Full Stack Developer",
            &["JavaScript", "React", "Node.js", "HTML", "CSS", "SQL", "Git", "REST APIs", "MongoDB", "Docker"],
        ),
        career(
            "Frontend Developer",
            &["HTML", "CSS", "JavaScript", "React", "TypeScript", "Git", "Figma"],
        ),
        career(
            "Backend Developer",
            &["Python", "SQL", "REST APIs", "Node.js", "PostgreSQL", "Docker", "Git", "Redis"],
        ),
        career(
            "Data Scientist",
            &["Python", "Statistics", "SQL", "Pandas", "Machine Learning", "Data Analysis", "Deep Learning", "Tableau"],
        ),
        career(
            "Machine Learning Engineer",
            &["Python", "Machine Learning", "Deep Learning", "TensorFlow", "SQL", "Docker", "AWS"],
        ),
        career(
            "DevOps Engineer",
            &["Linux", "Git", "Docker", "CI/CD", "Kubernetes", "AWS", "Terraform", "Python"],
        ),
        career(
            "Mobile Developer",
            &["Swift", "Kotlin", "iOS Development", "Android Development", "React Native", "Flutter", "Firebase"],
        ),
        career(
            "UI/UX Designer",
            &["Figma", "UI Design", "User Research", "Prototyping", "HTML", "CSS", "Adobe XD"],
        ),
    ]
}

pub fn trending() -> Vec<TrendingSkills> {
    let entry = |category: &str, skills: &[&str]| TrendingSkills {
        category: category.to_string(),
        skills: strings(skills),
    };
    vec![
        entry("Programming Languages", &["Rust", "TypeScript", "Go"]),
        entry("Web Development", &["GraphQL", "Vue.js"]),
        entry("Data Science", &["Deep Learning", "TensorFlow"]),
        entry("Cloud & DevOps", &["Kubernetes", "Terraform"]),
        entry("Mobile Development", &["Flutter", "React Native"]),
        entry("Design", &["Prototyping"]),
        entry("Databases", &["Redis"]),
    ]
}

pub fn roles() -> Vec<RoleRequirement> {
    vec![
        RoleRequirement::new(
            "Full Stack Developer",
            &["JavaScript", "React", "Node.js", "SQL"],
            &["TypeScript", "REST APIs", "Git", "Docker"],
            &["GraphQL", "AWS", "MongoDB"],
        ),
        RoleRequirement::new(
            "Frontend Developer",
            &["HTML", "CSS", "JavaScript", "React"],
            &["TypeScript", "Git"],
            &["Figma", "GraphQL", "Vue.js"],
        ),
        RoleRequirement::new(
            "Backend Developer",
            &["Python", "SQL", "REST APIs"],
            &["PostgreSQL", "Docker", "Git"],
            &["Redis", "Go", "AWS"],
        ),
        RoleRequirement::new(
            "Data Scientist",
            &["Python", "Statistics", "Machine Learning", "SQL"],
            &["Pandas", "Data Analysis", "Deep Learning"],
            &["Tableau", "TensorFlow"],
        ),
        RoleRequirement::new(
            "Machine Learning Engineer",
            &["Python", "Machine Learning", "Deep Learning"],
            &["TensorFlow", "Docker", "SQL"],
            &["AWS", "Kubernetes"],
        ),
        RoleRequirement::new(
            "DevOps Engineer",
            &["Linux", "Docker", "Kubernetes", "CI/CD"],
            &["AWS", "Terraform", "Python"],
            &["Go", "Git"],
        ),
        RoleRequirement::new(
            "Mobile Developer",
            &["Swift", "Kotlin"],
            &["iOS Development", "Android Development", "Firebase"],
            &["React Native", "Flutter"],
        ),
        RoleRequirement::new(
            "UI/UX Designer",
            &["Figma", "UI Design", "User Research"],
            &["Prototyping", "Adobe XD"],
            &["HTML", "CSS"],
        ),
        RoleRequirement::new(
            "Data Analyst",
            &["SQL", "Data Analysis", "Statistics"],
            &["Python", "Tableau"],
            &["Pandas", "Machine Learning"],
        ),
    ]
}
