// Skill Matcher: complementary matching between the caller and stored users.

pub mod handlers;
pub mod matcher;
