use async_trait::async_trait;

use crate::domain::{Account, AccountDraft};
use crate::error::RepoError;

/// Account store. The store is the only place account ids are generated.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a draft whose password is already hashed.
    async fn add(&self, draft: AccountDraft) -> Result<Account, RepoError>;
}
