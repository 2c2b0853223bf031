//! Login and logout flows.

mod login;
mod logout;

pub use login::{LoginAction, LoginOutcome};
pub use logout::LogoutAction;

/// Throttling configuration for the login flow.
#[derive(Debug, Clone, Copy)]
pub struct LoginConfig {
    /// Failed attempts before further logins are refused.
    pub max_failed_attempts: u32,
    /// Window, in minutes, over which failed attempts are counted.
    pub lockout_duration_minutes: i64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: 5,
            lockout_duration_minutes: 15,
        }
    }
}
