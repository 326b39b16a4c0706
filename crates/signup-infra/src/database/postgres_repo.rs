//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, RuntimeErr, Set, sqlx};
use uuid::Uuid;

use signup_core::domain::{Account, AccountDraft};
use signup_core::error::RepoError;
use signup_core::ports::{AccountRepository, LogError, LogErrorRepository};

use super::entity::{account, error_log};
use super::mask_email;

/// PostgreSQL account store.
pub struct PostgresAccountRepository {
    db: DbConn,
}

impl PostgresAccountRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn add(&self, draft: AccountDraft) -> Result<Account, RepoError> {
        tracing::debug!(user_email = %mask_email(&draft.email), "Inserting account");

        let model = account::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(draft.name),
            email: Set(draft.email),
            password: Set(draft.password),
        };

        let inserted = model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(inserted.into())
    }
}

/// PostgreSQL error log, one row per failed request.
pub struct PostgresLogErrorRepository {
    db: DbConn,
}

impl PostgresLogErrorRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogErrorRepository for PostgresLogErrorRepository {
    async fn log_error(&self, stack: &str) -> Result<(), LogError> {
        let entry = error_log::ActiveModel {
            id: Set(Uuid::new_v4()),
            stack: Set(stack.to_string()),
            created_at: Set(Utc::now().into()),
        };

        entry
            .insert(&self.db)
            .await
            .map_err(|e| LogError::Write(e.to_string()))?;

        Ok(())
    }
}

/// SQLSTATE raised by PostgreSQL on a unique index conflict.
const UNIQUE_VIOLATION: &str = "23505";

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(detail) = unique_violation(&err) {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            tracing::error!("Database connection error: {}", err);
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

fn unique_violation(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
            if e.code().as_deref() == Some(UNIQUE_VIOLATION) =>
        {
            Some(e.message().to_string())
        }
        _ => None,
    }
}
