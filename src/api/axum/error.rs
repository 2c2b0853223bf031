use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::ErrorResponse;
use crate::AuthError;

/// Converts `AuthError` into appropriate HTTP responses.
#[derive(Debug)]
pub struct AppError(pub AuthError);

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse::from(&self.0);
        let status = match &self.0 {
            AuthError::TokenMissing
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::ConfigurationError(_)
            | AuthError::PasswordHashError
            | AuthError::StoreError(_) => {
                log::error!(
                    target: "ecosort_auth",
                    "msg=\"internal error\" detail=\"{}\"",
                    self.0
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(error_response)).into_response()
    }
}
