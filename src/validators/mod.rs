pub mod email;

pub use email::validate_email;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    EmailEmpty,
    EmailTooLong,
    EmailInvalidFormat,
    UnknownRole,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailEmpty => write!(f, "Email cannot be empty"),
            Self::EmailTooLong => write!(f, "Email is too long (max 254 characters)"),
            Self::EmailInvalidFormat => write!(f, "Invalid email format"),
            Self::UnknownRole => write!(f, "Unknown role"),
        }
    }
}

impl std::error::Error for ValidationError {}
