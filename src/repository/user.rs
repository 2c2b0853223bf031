use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::principal::Principal;
use crate::role::Role;
use crate::AuthError;

/// An account row as the credential store hands it to the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AccountRecord {
    /// The identity this account authenticates as.
    #[must_use]
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

#[cfg(any(test, feature = "mocks"))]
impl AccountRecord {
    pub fn mock_from_credentials(email: &str, hashed_password: &str) -> Self {
        Self::mock_with_role("acct-1", email, hashed_password, Role::User)
    }

    pub fn mock_with_role(id: &str, email: &str, hashed_password: &str, role: Role) -> Self {
        let now = Utc::now();
        AccountRecord {
            id: id.to_owned(),
            email: email.to_owned(),
            name: "Test Account".to_owned(),
            role,
            hashed_password: hashed_password.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Read-only account lookup.
///
/// Account creation, password changes and role changes live in the
/// admin service that owns the store; the gate only reads.
#[async_trait]
pub trait UserRepository {
    async fn find_account_by_id(&self, id: &str) -> Result<Option<AccountRecord>, AuthError>;
    async fn find_account_by_email(&self, email: &str)
        -> Result<Option<AccountRecord>, AuthError>;
}
