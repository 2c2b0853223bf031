//! Authentication and authorization gate for the EcoSort platform.
//!
//! The gate covers four concerns: issuing session tokens at login,
//! verifying them on every protected request, pure role-based access
//! checks, and the error taxonomy protected routes map to HTTP
//! statuses. Account storage stays behind the [`UserRepository`]
//! contract; the real credential store lives elsewhere.
//!
//! Tokens are stateless HS256 JWTs. There is no server-side session
//! state and no revocation list: logout clears the browser cookie and
//! a captured token remains valid until its natural expiry.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ecosort_auth::{AuthConfig, TokenService};
//! use ecosort_auth::actions::LoginAction;
//!
//! let config = AuthConfig::from_env()?;
//! let tokens = TokenService::new(config.token);
//! let login = LoginAction::new(user_repo, rate_limiter, tokens);
//! let outcome = login.execute("resident@example.com", &password).await?;
//! ```

pub mod actions;
pub mod api;
pub mod authorize;
pub mod config;
pub mod cookie;
pub mod crypto;
pub mod events;
pub mod principal;
pub mod repository;
pub mod role;
pub mod secret;
pub mod token;
pub mod validators;

pub use authorize::{assert_owner, authorize};
pub use config::{AuthConfig, CookieConfig, SameSite, TokenConfig, MIN_SECRET_LENGTH};
pub use events::register_event_listeners;
pub use principal::Principal;
pub use repository::{AccountRecord, RateLimiterRepository, UserRepository};
pub use role::Role;
pub use secret::SecretString;
pub use token::{SignedToken, TokenClaims, TokenService};
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockRateLimiterRepository, MockUserRepository};

use std::fmt;

/// The single error type of the gate.
///
/// Every operation in this crate fails with an `AuthError`; the HTTP
/// layer maps variants to statuses in one place. `TokenMissing`,
/// `TokenInvalid` and `TokenExpired` are distinguishable here but
/// collapse into one opaque body at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// Fatal startup condition, e.g. a missing or too-short secret.
    ConfigurationError(String),
    /// No token in the `Authorization` header or the session cookie.
    TokenMissing,
    /// Signature, shape or claim validation failed.
    TokenInvalid,
    /// Signature was fine but the token is past its expiry.
    TokenExpired,
    /// Authenticated, but the role or ownership check denied access.
    Forbidden,
    /// Unknown email or wrong password; callers cannot tell which.
    InvalidCredentials,
    /// Login throttle kicked in for this email.
    TooManyAttempts,
    /// Malformed login payload.
    Validation(ValidationError),
    /// Password hash could not be computed or parsed.
    PasswordHashError,
    /// The credential store failed; detail is logged, never sent to clients.
    StoreError(String),
}

impl AuthError {
    /// True for the three sub-cases that surface as a single 401.
    #[must_use]
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::TokenMissing | AuthError::TokenInvalid | AuthError::TokenExpired
        )
    }
}

impl std::error::Error for AuthError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            AuthError::TokenMissing => write!(f, "Missing authentication token"),
            AuthError::TokenInvalid => write!(f, "Invalid token"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
            AuthError::Forbidden => write!(f, "Forbidden"),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::TooManyAttempts => write!(f, "Too many login attempts"),
            AuthError::Validation(err) => write!(f, "{err}"),
            AuthError::PasswordHashError => write!(f, "Failed to process password hash"),
            AuthError::StoreError(msg) => write!(f, "Store error: {msg}"),
        }
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::Validation(err)
    }
}
