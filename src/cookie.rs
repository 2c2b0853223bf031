//! Session cookie rendering.
//!
//! Builds `Set-Cookie` header values as plain strings so the crate
//! works with any HTTP framework. Attributes come from
//! [`CookieConfig`].

use crate::config::CookieConfig;

/// Renders a `Set-Cookie` value carrying the session token.
#[must_use]
pub fn session_cookie(config: &CookieConfig, token: &str, max_age_secs: i64) -> String {
    render(config, token, max_age_secs)
}

/// Renders a `Set-Cookie` value that clears the session cookie.
///
/// Empty value with `Max-Age=0` and the same attributes as the session
/// cookie, so browsers match and drop the original.
#[must_use]
pub fn clear_cookie(config: &CookieConfig) -> String {
    render(config, "", 0)
}

fn render(config: &CookieConfig, value: &str, max_age_secs: i64) -> String {
    let mut cookie = format!(
        "{}={value}; Path={}; Max-Age={max_age_secs}; SameSite={}",
        config.name,
        config.path,
        config.same_site.as_str()
    );

    if config.http_only {
        cookie.push_str("; HttpOnly");
    }
    if config.secure {
        cookie.push_str("; Secure");
    }
    if let Some(ref domain) = config.domain {
        cookie.push_str("; Domain=");
        cookie.push_str(domain);
    }

    cookie
}
