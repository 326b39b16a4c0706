//! In-memory account store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use signup_core::domain::{Account, AccountDraft};
use signup_core::error::RepoError;
use signup_core::ports::AccountRepository;

use super::mask_email;

/// Account store over a HashMap keyed by e-mail.
///
/// Uniqueness is an exact match, like the `accounts.email` unique index.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, draft: AccountDraft) -> Result<Account, RepoError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&draft.email) {
            tracing::debug!(user_email = %mask_email(&draft.email), "Rejecting duplicate account");
            return Err(RepoError::Constraint("email already registered".to_string()));
        }

        let account = draft.into_account(Uuid::new_v4().to_string());
        accounts.insert(account.email.clone(), account.clone());
        tracing::debug!(user_email = %mask_email(&account.email), "Account stored in memory");

        Ok(account)
    }
}
