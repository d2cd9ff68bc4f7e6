pub mod response;
pub mod role;
pub mod user;
