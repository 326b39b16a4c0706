//! Input validation adapters.

mod email;

pub use email::ValidatorEmailAdapter;
