//! Argon2 password hashing implementation.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

use signup_core::ports::{Hasher, HashingError};

/// Argon2id cost parameters. `None` keeps the crate default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Config {
    pub memory_kib: Option<u32>,
    pub iterations: Option<u32>,
    pub parallelism: Option<u32>,
}

impl Argon2Config {
    fn params(&self) -> Params {
        let params = Params::new(
            self.memory_kib.unwrap_or(Params::DEFAULT_M_COST),
            self.iterations.unwrap_or(Params::DEFAULT_T_COST),
            self.parallelism.unwrap_or(Params::DEFAULT_P_COST),
            None,
        );

        params.unwrap_or_else(|e| {
            tracing::warn!(error = %e, config = ?self, "Invalid Argon2 parameters, using defaults");
            Params::default()
        })
    }
}

/// Argon2id hashing service. Every call draws a fresh salt, so hashing the
/// same secret twice gives different PHC strings.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::with_config(Argon2Config::default())
    }

    pub fn with_config(config: Argon2Config) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, config.params()),
        }
    }

    /// Check a plaintext against a PHC digest produced by [`Hasher::hash`].
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashingError> {
        let parsed = PasswordHash::new(digest).map_err(|e| HashingError::Primitive(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Hasher for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();

        // Argon2 is deliberately slow; keep it off the async workers.
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| HashingError::Primitive(e.to_string()))
        })
        .await
        .map_err(|e| HashingError::Aborted(e.to_string()))?
    }
}
