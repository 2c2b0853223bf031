//! Axum adapter: extractors, routes and error mapping.

mod error;
mod handlers;
mod middleware;
mod routes;

pub use error::AppError;
pub use middleware::{
    extract_bearer_token, extract_cookie_token, extract_token, AuthPrincipal, Elevated,
    Managerial, RequireRole, RoleSet, Staff,
};
pub use routes::{auth_routes, private_routes, public_routes, AppState};
