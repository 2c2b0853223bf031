//! HTTP handlers for the Axum auth endpoints.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::error::AppError;
use super::middleware::AuthPrincipal;
use super::routes::AppState;
use crate::actions::{LoginAction, LogoutAction};
use crate::api::{AccountResponse, AuthResponse, LoginRequest, MessageResponse};
use crate::cookie::session_cookie;
use crate::repository::{RateLimiterRepository, UserRepository};
use crate::AuthError;

/// Authenticate and set the session cookie.
///
/// POST /login
pub async fn login<U, R>(
    State(state): State<AppState<U, R>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    let action = LoginAction::with_config(
        state.user_repo,
        state.rate_limiter,
        state.token_service.clone(),
        state.login,
    );

    let outcome = action.execute(&body.email, &body.password).await?;

    let cookie = session_cookie(
        &state.cookie,
        outcome.token.token.expose_secret(),
        state.token_service.ttl().num_seconds(),
    );
    let headers = set_cookie_headers(&cookie)?;

    Ok((
        StatusCode::OK,
        headers,
        Json(AuthResponse {
            account: AccountResponse::from(outcome.account),
            token: outcome.token.token,
            expires_at: outcome.token.expires_at,
        }),
    ))
}

/// Clear the session cookie.
///
/// POST /logout
pub async fn logout<U, R>(
    State(state): State<AppState<U, R>>,
    principal: AuthPrincipal,
) -> Result<impl IntoResponse, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    let action = LogoutAction::new(state.cookie.clone());
    let cookie = action.execute(&principal.0).await;
    let headers = set_cookie_headers(&cookie)?;

    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            message: "Logged out".to_owned(),
        }),
    ))
}

/// Return the account behind the presented token.
///
/// GET /me
pub async fn me<U, R>(
    State(state): State<AppState<U, R>>,
    principal: AuthPrincipal,
) -> Result<impl IntoResponse, AppError>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    let account = state
        .user_repo
        .find_account_by_id(&principal.0.id)
        .await?
        // Account deleted after issuance; the token no longer names anyone.
        .ok_or(AuthError::TokenInvalid)?;

    Ok(Json(AccountResponse::from(account)))
}

fn set_cookie_headers(cookie: &str) -> Result<HeaderMap, AppError> {
    let value = HeaderValue::from_str(cookie).map_err(|_| {
        AppError(AuthError::ConfigurationError(
            "cookie attributes are not a valid header value".to_owned(),
        ))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, value);
    Ok(headers)
}
