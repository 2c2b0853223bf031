use serde::{Deserialize, Serialize};

use crate::principal::Principal;
use crate::role::Role;

/// Claims embedded in a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the account id in the credential store.
    pub sub: String,
    /// Account email at issuance time.
    pub email: String,
    /// Account role at issuance time.
    pub role: Role,
    /// Issued at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issuer (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl TokenClaims {
    /// Builds the authenticated identity these claims describe.
    #[must_use]
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.sub.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}
