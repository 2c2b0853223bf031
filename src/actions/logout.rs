use chrono::Utc;

use crate::config::CookieConfig;
use crate::cookie::clear_cookie;
use crate::events::{dispatch, AuthEvent};
use crate::principal::Principal;

/// Stateless logout.
///
/// Tokens carry no server-side state, so logout cannot revoke them; a
/// copy of the token kept by the client verifies until `exp`. What
/// logout does is tell the browser to drop its cookie. Deployments
/// that need hard revocation must front the gate with a denylist.
pub struct LogoutAction {
    cookie: CookieConfig,
}

impl LogoutAction {
    /// Creates a new `LogoutAction` rendering clears for the given
    /// cookie shape.
    #[must_use]
    pub fn new(cookie: CookieConfig) -> Self {
        LogoutAction { cookie }
    }

    /// Logs the principal out, returning the `Set-Cookie` value that
    /// clears the session cookie.
    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all))]
    pub async fn execute(&self, principal: &Principal) -> String {
        dispatch(AuthEvent::LoggedOut {
            account_id: principal.id.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "ecosort_auth",
            "msg=\"logout\" account_id={}",
            principal.id
        );

        clear_cookie(&self.cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    #[tokio::test]
    async fn test_logout_returns_clearing_cookie() {
        let logout = LogoutAction::new(CookieConfig::default());
        let principal = Principal {
            id: "acct-1".to_owned(),
            email: "resident@example.com".to_owned(),
            role: Role::User,
        };

        let cookie = logout.execute(&principal).await;

        assert!(cookie.starts_with("token=; "));
        assert!(cookie.contains("Max-Age=0"));
    }
}
