use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::AccountRecord;
use crate::role::Role;
use crate::{AuthError, SecretString};

// Request DTOs

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

// Response DTOs

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub account: AccountResponse,
    pub token: SecretString,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("account", &self.account)
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl From<AccountRecord> for AccountResponse {
    fn from(account: AccountRecord) -> Self {
        AccountResponse {
            id: account.id,
            email: account.email,
            name: account.name,
            role: account.role,
            created_at: account.created_at,
        }
    }
}

impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        // All three token failures collapse into one body so a caller
        // cannot tell a missing token from a bad or stale one. Internal
        // failures never leak their detail.
        let (error, code) = match err {
            AuthError::TokenMissing | AuthError::TokenInvalid | AuthError::TokenExpired => {
                ("Authentication required".to_owned(), "UNAUTHENTICATED")
            }
            AuthError::InvalidCredentials => {
                ("Invalid email or password".to_owned(), "INVALID_CREDENTIALS")
            }
            AuthError::Forbidden => ("Forbidden".to_owned(), "FORBIDDEN"),
            AuthError::TooManyAttempts => {
                ("Too many login attempts".to_owned(), "TOO_MANY_ATTEMPTS")
            }
            AuthError::Validation(e) => (e.to_string(), "VALIDATION_ERROR"),
            AuthError::ConfigurationError(_)
            | AuthError::PasswordHashError
            | AuthError::StoreError(_) => ("Internal server error".to_owned(), "INTERNAL_ERROR"),
        };

        ErrorResponse {
            error,
            code: code.to_owned(),
        }
    }
}

impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::ValidationError;

    #[test]
    fn test_token_errors_collapse_to_one_body() {
        let missing = ErrorResponse::from(AuthError::TokenMissing);
        let invalid = ErrorResponse::from(AuthError::TokenInvalid);
        let expired = ErrorResponse::from(AuthError::TokenExpired);

        assert_eq!(missing, invalid);
        assert_eq!(invalid, expired);
        assert_eq!(missing.code, "UNAUTHENTICATED");
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        let response = ErrorResponse::from(AuthError::StoreError(
            "connection refused at 10.0.0.3:5432".to_owned(),
        ));

        assert_eq!(response.error, "Internal server error");
        assert_eq!(response.code, "INTERNAL_ERROR");

        let response = ErrorResponse::from(AuthError::ConfigurationError(
            "signing secret must be at least 32 bytes".to_owned(),
        ));
        assert_eq!(response.error, "Internal server error");
    }

    #[test]
    fn test_validation_detail_is_shown() {
        let response = ErrorResponse::from(AuthError::Validation(ValidationError::EmailEmpty));
        assert_eq!(response.error, "Email cannot be empty");
        assert_eq!(response.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_auth_response_debug_redacts_token() {
        let response = AuthResponse {
            account: AccountResponse {
                id: "acct-1".to_owned(),
                email: "resident@example.com".to_owned(),
                name: "Resident".to_owned(),
                role: Role::User,
                created_at: Utc::now(),
            },
            token: SecretString::new("header.payload.signature"),
            expires_at: Utc::now(),
        };

        let debug = format!("{response:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("header.payload.signature"));
    }
}
