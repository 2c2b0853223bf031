//! Stateless session tokens.
//!
//! Tokens are HS256-signed JWTs carrying the account id, email and role.
//! There is no server-side token state; possession of a token with a
//! valid signature and unexpired `exp` is the whole session.

mod claims;
mod service;

pub use claims::TokenClaims;
pub use service::{SignedToken, TokenService};
