//! Security-focused test suite.
//!
//! Run with: `cargo test --features mocks --test security`

#![cfg(feature = "mocks")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use chrono::Duration;
use ecosort_auth::crypto::{verify_password, Argon2Hasher, PasswordHasher};
use ecosort_auth::{
    AuthError, Principal, Role, SecretString, TokenConfig, TokenService, MIN_SECRET_LENGTH,
};

const SECRET: &str = "test-secret-32-bytes-long-key-ab";

fn principal() -> Principal {
    Principal {
        id: "u-1".to_owned(),
        email: "resident@example.com".to_owned(),
        role: Role::User,
    }
}

// =============================================================================
// Password Security Tests
// =============================================================================

#[test]
fn argon2_produces_different_hashes_for_same_password() {
    let hasher = Argon2Hasher::default();
    let password = "testpassword123";

    let hash1 = hasher.hash(password).unwrap();
    let hash2 = hasher.hash(password).unwrap();

    // Same password should produce different hashes due to random salt
    assert_ne!(hash1, hash2);

    // But both should verify correctly
    assert!(hasher.verify(password, &hash1).unwrap());
    assert!(hasher.verify(password, &hash2).unwrap());
}

#[test]
fn argon2_wrong_password_fails_verification() {
    let hasher = Argon2Hasher::default();
    let hash = hasher.hash("correctpassword").unwrap();

    assert!(!hasher.verify("wrongpassword", &hash).unwrap());
}

#[test]
fn argon2_production_hashes_verify_with_default_verifier() {
    let hash = Argon2Hasher::production().hash("testpassword").unwrap();

    // Verification parameters come from the hash string, not the hasher
    assert!(verify_password("testpassword", &hash).unwrap());
}

#[test]
fn malformed_hash_is_an_error_not_a_mismatch() {
    let result = verify_password("anything", "$argon2id$garbage");
    assert_eq!(result.unwrap_err(), AuthError::PasswordHashError);
}

// =============================================================================
// Secret Handling Tests
// =============================================================================

#[test]
fn secret_string_never_prints_its_value() {
    let secret = SecretString::new("hunter2-hunter2");

    assert!(!format!("{secret:?}").contains("hunter2"));
    assert!(!format!("{secret}").contains("hunter2"));
}

#[test]
fn token_config_debug_redacts_secret() {
    let config = TokenConfig::new(SECRET).unwrap();
    let debug = format!("{config:?}");

    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains(SECRET));
}

#[test]
fn short_secret_is_rejected_at_startup() {
    let result = TokenConfig::new("a".repeat(MIN_SECRET_LENGTH - 1));
    assert!(matches!(
        result.unwrap_err(),
        AuthError::ConfigurationError(_)
    ));

    assert!(TokenConfig::new("a".repeat(MIN_SECRET_LENGTH)).is_ok());
}

// =============================================================================
// Token Security Tests
// =============================================================================

#[test]
fn tampered_token_is_rejected() {
    let service = TokenService::new(TokenConfig::new(SECRET).unwrap());
    let signed = service.issue(&principal()).unwrap();

    let mut token = signed.token.expose_secret().to_owned();
    let last = token.pop().unwrap();
    token.push(if last == 'x' { 'y' } else { 'x' });

    assert_eq!(service.verify(&token).unwrap_err(), AuthError::TokenInvalid);
}

#[test]
fn token_signed_with_other_secret_is_rejected() {
    let ours = TokenService::new(TokenConfig::new(SECRET).unwrap());
    let theirs =
        TokenService::new(TokenConfig::new("another-secret-32-bytes-long-key!").unwrap());

    let signed = theirs.issue(&principal()).unwrap();
    assert_eq!(
        ours.verify(signed.token.expose_secret()).unwrap_err(),
        AuthError::TokenInvalid
    );
}

#[test]
fn expired_token_is_rejected_as_expired() {
    let service = TokenService::new(
        TokenConfig::new(SECRET)
            .unwrap()
            .with_ttl(Duration::seconds(-3600)),
    );
    let verifier = TokenService::new(TokenConfig::new(SECRET).unwrap());

    let signed = service.issue(&principal()).unwrap();
    assert_eq!(
        verifier.verify(signed.token.expose_secret()).unwrap_err(),
        AuthError::TokenExpired
    );
}

#[test]
fn token_round_trip_preserves_identity_and_role() {
    let service = TokenService::new(TokenConfig::new(SECRET).unwrap());

    for role in Role::ALL {
        let p = Principal {
            id: "acct-7".to_owned(),
            email: "staff@example.com".to_owned(),
            role,
        };
        let signed = service.issue(&p).unwrap();
        let verified = service.verify(signed.token.expose_secret()).unwrap();

        assert_eq!(verified, p);
    }
}
