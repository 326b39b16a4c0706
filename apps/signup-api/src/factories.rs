//! Composition root: picks the concrete adapter behind every port.

use std::sync::Arc;

use signup_core::ports::{AccountRepository, LogErrorRepository};
use signup_core::{DbAddAccount, LogControllerDecorator, SignUpController};
use signup_infra::{Argon2Config, Argon2Hasher, ValidatorEmailAdapter};

/// Build the signup pipeline:
/// logging decorator -> signup controller -> Argon2 + account store.
pub fn make_signup_controller(
    account_repository: Arc<dyn AccountRepository>,
    log_error_repository: Arc<dyn LogErrorRepository>,
    hashing: Argon2Config,
) -> LogControllerDecorator<SignUpController> {
    let hasher = Arc::new(Argon2Hasher::with_config(hashing));
    let add_account = Arc::new(DbAddAccount::new(hasher, account_repository));
    let controller = SignUpController::new(Arc::new(ValidatorEmailAdapter), add_account);

    LogControllerDecorator::new(controller, log_error_repository)
}
