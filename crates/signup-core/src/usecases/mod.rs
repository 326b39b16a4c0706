//! Application use cases.

mod add_account;

use async_trait::async_trait;

use crate::domain::{Account, AccountDraft};
use crate::error::AddAccountError;

pub use add_account::DbAddAccount;

/// Registers a new account from a draft carrying a plaintext password.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, draft: AccountDraft) -> Result<Account, AddAccountError>;
}
