#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::AuthError;

use super::user::{AccountRecord, UserRepository};

#[derive(Clone, Default)]
pub struct MockUserRepository {
    pub accounts: Arc<Mutex<Vec<AccountRecord>>>,
}

impl MockUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, account: AccountRecord) {
        let mut accounts = self.accounts.lock().unwrap();
        accounts.push(account);
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_account_by_id(&self, id: &str) -> Result<Option<AccountRecord>, AuthError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_account_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountRecord>, AuthError> {
        let accounts = self.accounts.lock().unwrap();
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }
}
