//! Role and ownership checks.
//!
//! Both checks are pure functions over a verified [`Principal`]; they
//! never look at request data. Denials are logged at `warn` with the
//! account id so operators can spot probing.

use crate::principal::Principal;
use crate::role::Role;
use crate::AuthError;

/// Checks that the principal's role is in the allowed set.
///
/// # Errors
///
/// Returns `AuthError::Forbidden` when the role is not allowed. An
/// empty allowed set denies everyone.
pub fn authorize(principal: &Principal, allowed: &[Role]) -> Result<(), AuthError> {
    if allowed.contains(&principal.role) {
        return Ok(());
    }

    log::warn!(
        target: "ecosort_auth",
        "msg=\"access denied\" account_id={} role={} required={:?}",
        principal.id,
        principal.role,
        allowed
    );

    Err(AuthError::Forbidden)
}

/// Checks that the principal owns the resource, or holds an elevated
/// role that bypasses ownership.
///
/// The owner id must come from the resource record, never from the
/// request.
///
/// # Errors
///
/// Returns `AuthError::Forbidden` when the principal is neither the
/// owner nor elevated.
pub fn assert_owner(principal: &Principal, resource_owner_id: &str) -> Result<(), AuthError> {
    if principal.id == resource_owner_id || principal.is_elevated() {
        return Ok(());
    }

    log::warn!(
        target: "ecosort_auth",
        "msg=\"ownership denied\" account_id={} resource_owner={resource_owner_id}",
        principal.id
    );

    Err(AuthError::Forbidden)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: &str, role: Role) -> Principal {
        Principal {
            id: id.to_owned(),
            email: format!("{id}@example.com"),
            role,
        }
    }

    #[test]
    fn test_authorize_member() {
        let p = principal("u-1", Role::Manager);
        assert!(authorize(&p, &[Role::Manager, Role::Admin]).is_ok());
    }

    #[test]
    fn test_authorize_non_member() {
        let p = principal("u-1", Role::User);
        assert_eq!(
            authorize(&p, &[Role::Admin, Role::Superadmin]).unwrap_err(),
            AuthError::Forbidden
        );
    }

    #[test]
    fn test_authorize_empty_set_denies_everyone() {
        for role in Role::ALL {
            let p = principal("u-1", role);
            assert_eq!(authorize(&p, &[]).unwrap_err(), AuthError::Forbidden);
        }
    }

    #[test]
    fn test_owner_allowed() {
        let p = principal("u-1", Role::User);
        assert!(assert_owner(&p, "u-1").is_ok());
    }

    #[test]
    fn test_peer_denied() {
        let p = principal("u-1", Role::User);
        assert_eq!(assert_owner(&p, "u-2").unwrap_err(), AuthError::Forbidden);
    }

    #[test]
    fn test_elevated_bypass() {
        for role in Role::ELEVATED {
            let p = principal("a-1", role);
            assert!(assert_owner(&p, "u-2").is_ok());
        }
    }

    #[test]
    fn test_staff_roles_do_not_bypass_ownership() {
        for role in [Role::Employee, Role::Manager] {
            let p = principal("e-1", role);
            assert_eq!(assert_owner(&p, "u-2").unwrap_err(), AuthError::Forbidden);
        }
    }
}
