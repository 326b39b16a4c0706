//! E-mail syntax validation port.

/// Checks that a string is a syntactically valid e-mail address.
///
/// Malformed input is `Ok(false)`. `Err` is reserved for the validator
/// itself breaking down.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, candidate: &str) -> Result<bool, EmailValidatorError>;
}

#[derive(Debug, thiserror::Error)]
#[error("Email validator failed: {0}")]
pub struct EmailValidatorError(pub String);
