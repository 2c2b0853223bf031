use serde::{Deserialize, Serialize};

use crate::role::Role;

/// An authenticated identity, derived only from a verified token.
///
/// Handlers never construct a `Principal` from request data; the token
/// service builds one after signature and expiry validation. Ownership
/// checks must use [`Principal::id`], never an id supplied by the
/// client in a URL or body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account id in the credential store.
    pub id: String,
    pub email: String,
    /// Role at issuance time.
    pub role: Role,
}

impl Principal {
    /// True when this principal may act on resources it does not own.
    #[must_use]
    pub fn is_elevated(&self) -> bool {
        self.role.is_elevated()
    }
}
