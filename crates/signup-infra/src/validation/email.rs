use validator::ValidateEmail;

use signup_core::ports::{EmailValidator, EmailValidatorError};

/// E-mail syntax check backed by the `validator` crate (HTML5 rules).
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidatorEmailAdapter;

impl EmailValidator for ValidatorEmailAdapter {
    fn is_valid(&self, candidate: &str) -> Result<bool, EmailValidatorError> {
        Ok(candidate.validate_email())
    }
}
