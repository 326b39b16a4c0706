//! Domain entities - the core business objects.

mod account;

pub use account::{Account, AccountDraft};
