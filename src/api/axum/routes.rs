use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::actions::LoginConfig;
use crate::config::CookieConfig;
use crate::repository::{RateLimiterRepository, UserRepository};
use crate::token::TokenService;

/// Shared state for the auth routes.
#[derive(Clone)]
pub struct AppState<U, R> {
    pub user_repo: U,
    pub rate_limiter: R,
    pub token_service: TokenService,
    pub cookie: CookieConfig,
    pub login: LoginConfig,
}

impl<U, R> AppState<U, R> {
    pub fn new(user_repo: U, rate_limiter: R, token_service: TokenService, cookie: CookieConfig) -> Self {
        Self {
            user_repo,
            rate_limiter,
            token_service,
            cookie,
            login: LoginConfig::default(),
        }
    }

    #[must_use]
    pub fn with_login_config(mut self, login: LoginConfig) -> Self {
        self.login = login;
        self
    }
}

/// All auth routes: public login plus token-guarded logout and `/me`.
pub fn auth_routes<U, R>() -> Router<AppState<U, R>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    Router::new().merge(public_routes()).merge(private_routes())
}

pub fn public_routes<U, R>() -> Router<AppState<U, R>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    Router::new().route("/login", post(handlers::login::<U, R>))
}

pub fn private_routes<U, R>() -> Router<AppState<U, R>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/logout", post(handlers::logout::<U, R>))
        .route("/me", get(handlers::me::<U, R>))
}
