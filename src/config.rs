use std::fmt;

use chrono::Duration;

use crate::secret::SecretString;
use crate::AuthError;

/// Minimum required length for the signing secret in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

/// Environment variable carrying the signing secret.
pub const ENV_SECRET: &str = "ECOSORT_AUTH_SECRET";
/// Environment variable overriding the token lifetime in days.
pub const ENV_TTL_DAYS: &str = "ECOSORT_AUTH_TTL_DAYS";
/// Environment variable enabling the `Secure` cookie attribute.
pub const ENV_COOKIE_SECURE: &str = "ECOSORT_AUTH_COOKIE_SECURE";

/// Configuration for token issuance and validation.
#[derive(Clone)]
pub struct TokenConfig {
    pub(crate) secret: SecretString,
    /// Token lifetime. Default: 7 days.
    pub(crate) ttl: Duration,
    /// Issuer claim (optional). Validated on verify when set.
    pub(crate) issuer: Option<String>,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenConfig {
    /// Creates a token configuration with the given signing secret.
    ///
    /// # Errors
    /// Returns `AuthError::ConfigurationError` if the secret is shorter
    /// than [`MIN_SECRET_LENGTH`] bytes. This is a startup-time failure;
    /// nothing else in the gate checks the secret again.
    pub fn new(secret: impl Into<String>) -> Result<Self, AuthError> {
        let secret = SecretString::new(secret);

        if secret.len() < MIN_SECRET_LENGTH {
            return Err(AuthError::ConfigurationError(format!(
                "signing secret must be at least {MIN_SECRET_LENGTH} bytes, got {}",
                secret.len()
            )));
        }

        Ok(Self {
            secret,
            ttl: Duration::days(7),
            issuer: None,
        })
    }

    /// Sets the token lifetime.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the issuer claim.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Returns the configured token lifetime.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

/// `SameSite` cookie attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    None,
    Lax,
    #[default]
    Strict,
}

impl SameSite {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SameSite::None => "None",
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
        }
    }
}

/// Attributes of the session cookie.
///
/// Defaults: name `token`, path `/`, `HttpOnly`, `SameSite=Strict`.
/// `Secure` is off by default so plain-HTTP development works;
/// production deployments enable it via [`CookieConfig::with_secure`]
/// or [`ENV_COOKIE_SECURE`].
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub path: String,
    pub domain: Option<String>,
    pub http_only: bool,
    pub same_site: SameSite,
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_owned(),
            path: "/".to_owned(),
            domain: None,
            http_only: true,
            same_site: SameSite::Strict,
            secure: false,
        }
    }
}

impl CookieConfig {
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Top-level gate configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub token: TokenConfig,
    pub cookie: CookieConfig,
}

impl AuthConfig {
    #[must_use]
    pub fn new(token: TokenConfig, cookie: CookieConfig) -> Self {
        Self { token, cookie }
    }

    /// Reads configuration from the environment.
    ///
    /// [`ENV_SECRET`] is required; [`ENV_TTL_DAYS`] and
    /// [`ENV_COOKIE_SECURE`] are optional.
    ///
    /// # Errors
    /// Returns `AuthError::ConfigurationError` when the secret is
    /// missing or too short, or when the TTL override is not a
    /// positive integer.
    pub fn from_env() -> Result<Self, AuthError> {
        let secret = std::env::var(ENV_SECRET)
            .map_err(|_| AuthError::ConfigurationError(format!("{ENV_SECRET} must be set")))?;
        let mut token = TokenConfig::new(secret)?;

        if let Ok(days) = std::env::var(ENV_TTL_DAYS) {
            let days: i64 = days.parse().map_err(|_| {
                AuthError::ConfigurationError(format!("{ENV_TTL_DAYS} must be an integer"))
            })?;
            if days <= 0 {
                return Err(AuthError::ConfigurationError(format!(
                    "{ENV_TTL_DAYS} must be positive, got {days}"
                )));
            }
            token = token.with_ttl(Duration::days(days));
        }

        let mut cookie = CookieConfig::default();
        if let Ok(secure) = std::env::var(ENV_COOKIE_SECURE) {
            cookie.secure = matches!(secure.as_str(), "1" | "true" | "yes");
        }

        Ok(Self { token, cookie })
    }
}
