#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::AuthError;

use super::rate_limiter::{LoginAttempt, RateLimiterRepository};

#[derive(Clone, Default)]
pub struct MockRateLimiterRepository {
    pub attempts: Arc<Mutex<Vec<LoginAttempt>>>,
}

impl MockRateLimiterRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimiterRepository for MockRateLimiterRepository {
    async fn record_attempt(
        &self,
        email: &str,
        success: bool,
        ip_address: Option<&str>,
    ) -> Result<(), AuthError> {
        let attempt = LoginAttempt {
            email: email.to_owned(),
            success,
            ip_address: ip_address.map(ToOwned::to_owned),
            attempted_at: Utc::now(),
        };

        let mut attempts = self.attempts.lock().unwrap();
        attempts.push(attempt);
        drop(attempts);

        Ok(())
    }

    async fn get_recent_failed_attempts(
        &self,
        email: &str,
        since: DateTime<Utc>,
    ) -> Result<u32, AuthError> {
        let count = {
            let attempts = self.attempts.lock().unwrap();
            attempts
                .iter()
                .filter(|a| a.email == email && !a.success && a.attempted_at >= since)
                .count()
        };
        Ok(u32::try_from(count).unwrap_or(u32::MAX))
    }

    async fn clear_attempts(&self, email: &str) -> Result<(), AuthError> {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.retain(|a| a.email != email);
        drop(attempts);
        Ok(())
    }
}
