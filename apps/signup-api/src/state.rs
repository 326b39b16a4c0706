//! Application state - shared across all handlers.

use std::sync::Arc;

use signup_core::Controller;
use signup_core::domain::Account;
use signup_core::ports::{AccountRepository, LogErrorRepository};
use signup_infra::{InMemoryAccountRepository, TracingLogErrorRepository};
use signup_shared::SignupRequest;

use crate::config::AppConfig;
use crate::factories::make_signup_controller;

#[cfg(feature = "postgres")]
use signup_infra::{PostgresAccountRepository, PostgresLogErrorRepository, database};

/// The decorated signup pipeline behind `POST /api/signup`.
pub type SignupHandler = Arc<dyn Controller<Request = SignupRequest, Output = Account>>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub signup: SignupHandler,
    /// Which account store backs the pipeline, reported by the health route.
    pub store: &'static str,
}

type Stores = (
    &'static str,
    Arc<dyn AccountRepository>,
    Arc<dyn LogErrorRepository>,
);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (store, account_repository, log_error_repository) = Self::stores(config).await;

        tracing::info!(store, "Application state initialized");

        Self {
            signup: Arc::new(make_signup_controller(
                account_repository,
                log_error_repository,
                config.hashing,
            )),
            store,
        }
    }

    #[cfg(feature = "postgres")]
    async fn stores(config: &AppConfig) -> Stores {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match database::connect(db_config).await {
            Ok(conn) => (
                "postgres",
                Arc::new(PostgresAccountRepository::new(conn.clone())),
                Arc::new(PostgresLogErrorRepository::new(conn)),
            ),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn stores(_config: &AppConfig) -> Stores {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Self::in_memory()
    }

    fn in_memory() -> Stores {
        (
            "memory",
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(TracingLogErrorRepository),
        )
    }
}
