use axum::Router;

pub mod system;
pub mod users;

/// Versioned API prefix for the user endpoints.
pub const USER_API_PREFIX: &str = "/api/v1/user";

/// Router for all user endpoints.
pub fn router() -> Router {
    Router::new().nest(USER_API_PREFIX, users::router())
}
