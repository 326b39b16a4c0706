//! SeaORM entities.

pub mod account;
pub mod error_log;
