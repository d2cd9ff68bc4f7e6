// Cross-service operations and service metadata.

pub mod handlers;
pub mod summary;
