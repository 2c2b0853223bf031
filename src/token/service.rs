use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::TokenClaims;
use crate::config::TokenConfig;
use crate::principal::Principal;
use crate::secret::SecretString;
use crate::AuthError;

/// A freshly issued session token together with its expiry.
///
/// The token itself is a [`SecretString`] so `Debug` output never
/// contains the signed material.
#[derive(Debug, Clone)]
pub struct SignedToken {
    /// The encoded, signed token.
    pub token: SecretString,
    /// When the token stops verifying.
    pub expires_at: DateTime<Utc>,
}

/// Service for issuing and verifying session tokens.
#[derive(Clone)]
pub struct TokenService {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a new token service with the given configuration.
    ///
    /// The signing keys are derived once here; the secret is not
    /// touched again afterwards.
    #[must_use]
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.expose_secret().as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issues a signed token for the given principal.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenInvalid` if encoding fails.
    pub fn issue(&self, principal: &Principal) -> Result<SignedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.config.ttl;

        let claims = TokenClaims {
            sub: principal.id.clone(),
            email: principal.email.clone(),
            role: principal.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: self.config.issuer.clone(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::TokenInvalid)?;

        Ok(SignedToken {
            token: SecretString::new(token),
            expires_at,
        })
    }

    /// Verifies a token and returns the principal it carries.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenExpired` when the `exp` claim is in the
    /// past, `AuthError::TokenInvalid` for every other failure: bad
    /// signature, malformed token, issuer mismatch.
    pub fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        Ok(self.decode(token)?.principal())
    }

    /// Decodes and validates a token, returning the raw claims.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`TokenService::verify`].
    pub fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);

        if let Some(ref iss) = self.config.issuer {
            validation.set_issuer(&[iss]);
        }

        let token_data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?;

        Ok(token_data.claims)
    }

    /// Returns the configured token lifetime.
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.config.ttl()
    }
}
