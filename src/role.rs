use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validators::ValidationError;

/// The closed set of EcoSort account roles.
///
/// Roles are fixed at token issuance; a role change in the store takes
/// effect on the next login. The wire form is `snake_case`, matching
/// what the credential store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Employee,
    Manager,
    Admin,
    Superadmin,
}

impl Role {
    /// Every role, in ascending order of privilege.
    pub const ALL: [Role; 5] = [
        Role::User,
        Role::Employee,
        Role::Manager,
        Role::Admin,
        Role::Superadmin,
    ];

    /// Roles allowed to act on resources they do not own.
    pub const ELEVATED: [Role; 2] = [Role::Admin, Role::Superadmin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Employee => "employee",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::Superadmin => "superadmin",
        }
    }

    /// True for roles that bypass ownership checks.
    #[must_use]
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Admin | Role::Superadmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "employee" => Ok(Role::Employee),
            "manager" => Ok(Role::Manager),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::Superadmin),
            _ => Err(ValidationError::UnknownRole),
        }
    }
}
