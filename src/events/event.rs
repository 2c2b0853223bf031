use chrono::{DateTime, Utc};

use crate::role::Role;

/// Authentication events emitted by the gate.
///
/// Events are always fired from the login/logout flows and the role
/// checks. If no listeners are registered, they are silently ignored
/// (no-op). Register listeners via
/// [`register_event_listeners`](crate::register_event_listeners) to handle events.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    LoginSucceeded {
        account_id: String,
        email: String,
        at: DateTime<Utc>,
    },
    LoginFailed {
        email: String,
        reason: &'static str,
        at: DateTime<Utc>,
    },
    LoggedOut {
        account_id: String,
        at: DateTime<Utc>,
    },
    AccessDenied {
        account_id: String,
        role: Role,
        at: DateTime<Utc>,
    },
}

impl AuthEvent {
    /// Returns a dot-separated event name for logging/tracing.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoginSucceeded { .. } => "auth.login.succeeded",
            Self::LoginFailed { .. } => "auth.login.failed",
            Self::LoggedOut { .. } => "auth.logout",
            Self::AccessDenied { .. } => "auth.access_denied",
        }
    }

    /// Returns the timestamp when this event occurred.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::LoginSucceeded { at, .. }
            | Self::LoginFailed { at, .. }
            | Self::LoggedOut { at, .. }
            | Self::AccessDenied { at, .. } => *at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let now = Utc::now();

        assert_eq!(
            AuthEvent::LoginSucceeded {
                account_id: "acct-1".to_owned(),
                email: "test@example.com".to_owned(),
                at: now
            }
            .name(),
            "auth.login.succeeded"
        );

        assert_eq!(
            AuthEvent::LoginFailed {
                email: "test@example.com".to_owned(),
                reason: "wrong password",
                at: now
            }
            .name(),
            "auth.login.failed"
        );

        assert_eq!(
            AuthEvent::LoggedOut {
                account_id: "acct-1".to_owned(),
                at: now
            }
            .name(),
            "auth.logout"
        );

        assert_eq!(
            AuthEvent::AccessDenied {
                account_id: "acct-1".to_owned(),
                role: Role::User,
                at: now
            }
            .name(),
            "auth.access_denied"
        );
    }

    #[test]
    fn test_event_timestamp() {
        let now = Utc::now();

        let event = AuthEvent::LoggedOut {
            account_id: "acct-1".to_owned(),
            at: now,
        };

        assert_eq!(event.timestamp(), now);
    }

    #[test]
    fn test_event_debug() {
        let now = Utc::now();
        let event = AuthEvent::LoginFailed {
            email: "test@example.com".to_owned(),
            reason: "wrong password",
            at: now,
        };

        let debug_str = format!("{event:?}");
        assert!(debug_str.contains("LoginFailed"));
        assert!(debug_str.contains("test@example.com"));
        assert!(debug_str.contains("wrong password"));
    }
}
