//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod email;
mod hasher;
mod log;
mod repository;

pub use email::{EmailValidator, EmailValidatorError};
pub use hasher::{Hasher, HashingError};
pub use log::{LogError, LogErrorRepository};
pub use repository::AccountRepository;

#[cfg(test)]
pub use email::MockEmailValidator;
#[cfg(test)]
pub use hasher::MockHasher;
#[cfg(test)]
pub use log::MockLogErrorRepository;
#[cfg(test)]
pub use repository::MockAccountRepository;
