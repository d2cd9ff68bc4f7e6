// Skill Swapper: keyword search and browse over the user directory.

pub mod browse;
pub mod handlers;
pub mod search;
