use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Account, AccountDraft};
use crate::error::AddAccountError;
use crate::ports::{AccountRepository, Hasher};

use super::AddAccount;

/// Hashes the password, then hands the draft to the account store.
///
/// Failures from either step propagate as-is. The store is called at most
/// once per invocation and never after a hashing failure.
pub struct DbAddAccount {
    hasher: Arc<dyn Hasher>,
    account_repository: Arc<dyn AccountRepository>,
}

impl DbAddAccount {
    pub fn new(hasher: Arc<dyn Hasher>, account_repository: Arc<dyn AccountRepository>) -> Self {
        Self {
            hasher,
            account_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, draft: AccountDraft) -> Result<Account, AddAccountError> {
        let digest = self.hasher.hash(&draft.password).await?;
        let account = self.account_repository.add(draft.with_password(digest)).await?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::{HashingError, MockAccountRepository, MockHasher};

    fn draft() -> AccountDraft {
        AccountDraft::new("valid_name", "valid_email@mail.com", "valid_password")
    }

    fn stored(draft: AccountDraft) -> Account {
        draft.into_account("valid_id")
    }

    #[tokio::test]
    async fn test_hashes_before_persisting_the_digest() {
        let mut seq = Sequence::new();
        let mut hasher = MockHasher::new();
        let mut repository = MockAccountRepository::new();

        hasher
            .expect_hash()
            .withf(|plaintext| plaintext == "valid_password")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("hashed_password".to_string()));
        repository
            .expect_add()
            .withf(|draft| {
                *draft == AccountDraft::new("valid_name", "valid_email@mail.com", "hashed_password")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|draft| Ok(stored(draft)));

        let sut = DbAddAccount::new(Arc::new(hasher), Arc::new(repository));
        let account = sut.add(draft()).await.unwrap();

        assert_eq!(
            account,
            Account {
                id: "valid_id".to_string(),
                name: "valid_name".to_string(),
                email: "valid_email@mail.com".to_string(),
                password: "hashed_password".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_hashing_failure_skips_the_store() {
        let mut hasher = MockHasher::new();
        let mut repository = MockAccountRepository::new();

        hasher
            .expect_hash()
            .returning(|_| Err(HashingError::Primitive("out of memory".to_string())));
        repository.expect_add().times(0);

        let sut = DbAddAccount::new(Arc::new(hasher), Arc::new(repository));
        let result = sut.add(draft()).await;

        assert!(matches!(result, Err(AddAccountError::Hashing(_))));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut hasher = MockHasher::new();
        let mut repository = MockAccountRepository::new();

        hasher
            .expect_hash()
            .returning(|_| Ok("hashed_password".to_string()));
        repository
            .expect_add()
            .times(1)
            .returning(|_| Err(RepoError::Constraint("email already exists".to_string())));

        let sut = DbAddAccount::new(Arc::new(hasher), Arc::new(repository));
        let result = sut.add(draft()).await;

        assert!(matches!(
            result,
            Err(AddAccountError::Persistence(RepoError::Constraint(_)))
        ));
    }
}
