//! Password hashing implementations.

mod argon2;

pub use self::argon2::{Argon2Config, Argon2Hasher};
