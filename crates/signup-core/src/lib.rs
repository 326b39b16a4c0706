//! # Signup Core
//!
//! The request-processing pipeline of the signup service.
//! This crate depends only on abstract ports; concrete hashing, validation
//! and storage live in `signup-infra` and are wired by the binary.

pub mod decorators;
pub mod domain;
pub mod error;
pub mod ports;
pub mod presentation;
pub mod usecases;

pub use decorators::LogControllerDecorator;
pub use error::{AddAccountError, RepoError};
pub use presentation::{Controller, SignUpController};
pub use usecases::DbAddAccount;
