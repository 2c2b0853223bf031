use chrono::{Duration, Utc};

use crate::crypto::verify_password;
use crate::events::{dispatch, AuthEvent};
use crate::repository::{AccountRecord, RateLimiterRepository, UserRepository};
use crate::secret::SecretString;
use crate::token::{SignedToken, TokenService};
use crate::validators::validate_email;
use crate::AuthError;

use super::LoginConfig;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated account.
    pub account: AccountRecord,
    /// The freshly issued session token.
    pub token: SignedToken,
}

/// Password login with throttling.
///
/// Unknown email and wrong password both come back as
/// `InvalidCredentials` and both count against the throttle, so a
/// caller cannot probe which emails have accounts.
pub struct LoginAction<U: UserRepository, R: RateLimiterRepository> {
    user_repository: U,
    rate_limiter: R,
    token_service: TokenService,
    config: LoginConfig,
}

impl<U: UserRepository, R: RateLimiterRepository> LoginAction<U, R> {
    /// Creates a new login action with default throttling.
    pub fn new(user_repository: U, rate_limiter: R, token_service: TokenService) -> Self {
        Self::with_config(
            user_repository,
            rate_limiter,
            token_service,
            LoginConfig::default(),
        )
    }

    /// Creates a new login action with custom throttling config.
    pub fn with_config(
        user_repository: U,
        rate_limiter: R,
        token_service: TokenService,
        config: LoginConfig,
    ) -> Self {
        Self {
            user_repository,
            rate_limiter,
            token_service,
            config,
        }
    }

    /// Executes the login, returning the account and a signed token.
    ///
    /// # Errors
    ///
    /// - `Validation` when the email fails syntactic checks
    /// - `TooManyAttempts` when the throttle window is exhausted
    /// - `InvalidCredentials` for unknown email or wrong password
    /// - `StoreError` when a repository call fails
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<LoginOutcome, AuthError> {
        validate_email(email)?;

        let since = Utc::now() - Duration::minutes(self.config.lockout_duration_minutes);
        let failed_attempts = self
            .rate_limiter
            .get_recent_failed_attempts(email, since)
            .await?;
        if failed_attempts >= self.config.max_failed_attempts {
            log::warn!(
                target: "ecosort_auth",
                "msg=\"login throttled\" email={email} failed_attempts={failed_attempts}"
            );
            return Err(AuthError::TooManyAttempts);
        }

        let account = match self.user_repository.find_account_by_email(email).await? {
            Some(a) => a,
            None => {
                self.fail(email, "unknown email").await?;
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(password.expose_secret(), &account.hashed_password)? {
            self.fail(email, "wrong password").await?;
            return Err(AuthError::InvalidCredentials);
        }

        // Clear failed attempts on successful login
        self.rate_limiter.clear_attempts(email).await?;
        self.rate_limiter.record_attempt(email, true, None).await?;

        let token = self.token_service.issue(&account.principal())?;

        dispatch(AuthEvent::LoginSucceeded {
            account_id: account.id.clone(),
            email: account.email.clone(),
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "ecosort_auth",
            "msg=\"login success\" account_id={}",
            account.id
        );

        Ok(LoginOutcome { account, token })
    }

    async fn fail(&self, email: &str, reason: &'static str) -> Result<(), AuthError> {
        self.rate_limiter.record_attempt(email, false, None).await?;

        dispatch(AuthEvent::LoginFailed {
            email: email.to_owned(),
            reason,
            at: Utc::now(),
        })
        .await;

        log::info!(
            target: "ecosort_auth",
            "msg=\"login failed\" email={email} reason=\"{reason}\""
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::TokenConfig;
    use crate::crypto::{Argon2Hasher, PasswordHasher};
    use crate::repository::{MockRateLimiterRepository, MockUserRepository};
    use crate::role::Role;
    use crate::validators::ValidationError;

    fn hash_password(password: &str) -> String {
        Argon2Hasher::default().hash(password).unwrap()
    }

    fn create_token_service() -> TokenService {
        let config = TokenConfig::new("test-secret-32-bytes-long-key-ab").unwrap();
        TokenService::new(config)
    }

    fn seeded_repos(email: &str, password: &str) -> (MockUserRepository, MockRateLimiterRepository) {
        let user_repo = MockUserRepository::new();
        user_repo.insert(AccountRecord::mock_from_credentials(
            email,
            &hash_password(password),
        ));
        (user_repo, MockRateLimiterRepository::new())
    }

    #[tokio::test]
    async fn test_login_success() {
        let (user_repo, rate_limiter) = seeded_repos("resident@example.com", "securepassword");
        let token_service = create_token_service();
        let login = LoginAction::new(user_repo, rate_limiter, token_service.clone());

        let outcome = login
            .execute("resident@example.com", &SecretString::new("securepassword"))
            .await
            .unwrap();

        assert_eq!(outcome.account.email, "resident@example.com");

        let principal = token_service
            .verify(outcome.token.token.expose_secret())
            .unwrap();
        assert_eq!(principal.id, outcome.account.id);
        assert_eq!(principal.role, Role::User);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (user_repo, rate_limiter) = seeded_repos("resident@example.com", "securepassword");
        let login = LoginAction::new(user_repo, rate_limiter, create_token_service());

        let result = login
            .execute("resident@example.com", &SecretString::new("wrongpassword"))
            .await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_unknown_email_same_error_as_wrong_password() {
        let (user_repo, rate_limiter) = seeded_repos("resident@example.com", "securepassword");
        let login = LoginAction::new(user_repo, rate_limiter, create_token_service());

        let unknown = login
            .execute("nobody@example.com", &SecretString::new("whatever"))
            .await
            .unwrap_err();
        let wrong = login
            .execute("resident@example.com", &SecretString::new("wrongpassword"))
            .await
            .unwrap_err();

        assert_eq!(unknown, AuthError::InvalidCredentials);
        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn test_unknown_email_counts_against_throttle() {
        let user_repo = MockUserRepository::new();
        let rate_limiter = MockRateLimiterRepository::new();
        let login = LoginAction::new(user_repo, rate_limiter, create_token_service());

        for _ in 0..5 {
            let _ = login
                .execute("nobody@example.com", &SecretString::new("guess"))
                .await;
        }

        let result = login
            .execute("nobody@example.com", &SecretString::new("guess"))
            .await;
        assert_eq!(result.unwrap_err(), AuthError::TooManyAttempts);
    }

    #[tokio::test]
    async fn test_too_many_attempts() {
        let (user_repo, rate_limiter) = seeded_repos("resident@example.com", "securepassword");
        let login = LoginAction::new(user_repo, rate_limiter, create_token_service());

        // Make 5 failed attempts
        for _ in 0..5 {
            let _ = login
                .execute("resident@example.com", &SecretString::new("wrongpassword"))
                .await;
        }

        // 6th attempt is blocked even with the right password
        let result = login
            .execute("resident@example.com", &SecretString::new("securepassword"))
            .await;
        assert_eq!(result.unwrap_err(), AuthError::TooManyAttempts);
    }

    #[tokio::test]
    async fn test_success_clears_throttle() {
        let (user_repo, rate_limiter) = seeded_repos("resident@example.com", "securepassword");
        let login = LoginAction::new(user_repo, rate_limiter, create_token_service());

        for _ in 0..4 {
            let _ = login
                .execute("resident@example.com", &SecretString::new("wrongpassword"))
                .await;
        }

        assert!(login
            .execute("resident@example.com", &SecretString::new("securepassword"))
            .await
            .is_ok());

        // Counter reset; a few more failures do not trip the throttle
        for _ in 0..4 {
            let result = login
                .execute("resident@example.com", &SecretString::new("wrongpassword"))
                .await;
            assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        }
    }

    #[tokio::test]
    async fn test_invalid_email_rejected_before_store() {
        let user_repo = MockUserRepository::new();
        let rate_limiter = MockRateLimiterRepository::new();
        let login = LoginAction::new(user_repo, rate_limiter.clone(), create_token_service());

        let result = login
            .execute("not-an-email", &SecretString::new("whatever"))
            .await;
        assert_eq!(
            result.unwrap_err(),
            AuthError::Validation(ValidationError::EmailInvalidFormat)
        );

        // Syntactic rejects are not recorded as attempts
        assert!(rate_limiter.attempts.lock().unwrap().is_empty());
    }
}
