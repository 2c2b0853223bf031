use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use chrono::Utc;

use super::error::AppError;
use super::routes::AppState;
use crate::authorize::authorize;
use crate::events::{dispatch, AuthEvent};
use crate::principal::Principal;
use crate::repository::{RateLimiterRepository, UserRepository};
use crate::role::Role;
use crate::AuthError;

/// Pulls a bearer token from the `Authorization` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(ToOwned::to_owned)
}

/// Pulls the session token from the `Cookie` header.
///
/// An empty cookie value counts as absent; clearing cookies are set to
/// the empty string.
pub fn extract_cookie_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;

    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == cookie_name && !value.is_empty())
        .map(|(_, value)| value.to_owned())
}

/// Finds the session token in the request.
///
/// The `Authorization` header wins over the cookie when both carry a
/// token.
///
/// # Errors
///
/// Returns `AuthError::TokenMissing` when neither source has one.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Result<String, AuthError> {
    extract_bearer_token(headers)
        .or_else(|| extract_cookie_token(headers, cookie_name))
        .ok_or(AuthError::TokenMissing)
}

/// Verifies the request's token and yields the principal it carries.
///
/// Rejects with 401 when the token is missing, invalid or expired. The
/// store is not consulted; the signature is the whole check.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Principal);

impl AuthPrincipal {
    #[must_use]
    pub fn into_inner(self) -> Principal {
        self.0
    }
}

impl<U, R> FromRequestParts<AppState<U, R>> for AuthPrincipal
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, R>,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers, &state.cookie.name)?;
        let principal = state.token_service.verify(&token)?;

        Ok(AuthPrincipal(principal))
    }
}

/// A set of roles a route accepts.
///
/// Implemented by the marker types [`Staff`], [`Managerial`] and
/// [`Elevated`]; implement it yourself for custom sets.
pub trait RoleSet: Send + Sync + 'static {
    fn allowed() -> &'static [Role];
}

/// Any staff role: employee and up.
pub struct Staff;

impl RoleSet for Staff {
    fn allowed() -> &'static [Role] {
        &[Role::Employee, Role::Manager, Role::Admin, Role::Superadmin]
    }
}

/// Manager and up.
pub struct Managerial;

impl RoleSet for Managerial {
    fn allowed() -> &'static [Role] {
        &[Role::Manager, Role::Admin, Role::Superadmin]
    }
}

/// The roles that bypass ownership checks.
pub struct Elevated;

impl RoleSet for Elevated {
    fn allowed() -> &'static [Role] {
        &[Role::Admin, Role::Superadmin]
    }
}

/// Verifies the token and requires the principal's role to be in `G`.
///
/// A valid token with the wrong role rejects with 403, never 401; the
/// caller is authenticated, just not allowed.
pub struct RequireRole<G: RoleSet> {
    pub principal: Principal,
    _marker: PhantomData<G>,
}

impl<G: RoleSet> RequireRole<G> {
    #[must_use]
    pub fn into_inner(self) -> Principal {
        self.principal
    }
}

impl<U, R, G> FromRequestParts<AppState<U, R>> for RequireRole<G>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    R: RateLimiterRepository + Clone + Send + Sync + 'static,
    G: RoleSet,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<U, R>,
    ) -> Result<Self, Self::Rejection> {
        let AuthPrincipal(principal) = AuthPrincipal::from_request_parts(parts, state).await?;

        if let Err(err) = authorize(&principal, G::allowed()) {
            dispatch(AuthEvent::AccessDenied {
                account_id: principal.id.clone(),
                role: principal.role,
                at: Utc::now(),
            })
            .await;
            return Err(AppError(err));
        }

        Ok(RequireRole {
            principal,
            _marker: PhantomData,
        })
    }
}
