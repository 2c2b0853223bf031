//! Repository traits and data types.
//!
//! The gate never writes account data; it reads accounts for login and
//! the `/me` lookup, and records login attempts for throttling.
//! Implement these traits over your own database or storage backend.
//!
//! # Traits
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`UserRepository`] | Read-only account lookup |
//! | [`RateLimiterRepository`] | Login attempt tracking |
//!
//! # Mock Implementations
//!
//! Enable the `mocks` feature for in-memory implementations useful for
//! testing:
//!
//! - [`MockUserRepository`]
//! - [`MockRateLimiterRepository`]

mod rate_limiter;
mod user;

#[cfg(any(test, feature = "mocks"))]
mod rate_limiter_mock;
#[cfg(any(test, feature = "mocks"))]
mod user_mock;

pub use rate_limiter::LoginAttempt;
pub use rate_limiter::RateLimiterRepository;
pub use user::AccountRecord;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use rate_limiter_mock::MockRateLimiterRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_mock::MockUserRepository;
