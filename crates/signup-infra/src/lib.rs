//! # Signup Infrastructure
//!
//! Concrete implementations of the ports defined in `signup-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL account and error-log stores via SeaORM
//! - `crypto` - Argon2 password hashing

pub mod database;
pub mod log;
pub mod validation;

#[cfg(feature = "crypto")]
pub mod crypto;

// Re-exports - always available
pub use database::{DatabaseConfig, InMemoryAccountRepository};
pub use log::TracingLogErrorRepository;
pub use validation::ValidatorEmailAdapter;

#[cfg(feature = "crypto")]
pub use crypto::{Argon2Config, Argon2Hasher};

#[cfg(feature = "postgres")]
pub use database::{PostgresAccountRepository, PostgresLogErrorRepository};
