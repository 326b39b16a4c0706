//! Signup controller.

use std::sync::Arc;

use async_trait::async_trait;
use signup_shared::{ErrorDescriptor, HttpResponse, SignupRequest};

use crate::domain::{Account, AccountDraft};
use crate::ports::EmailValidator;
use crate::usecases::AddAccount;

use super::Controller;

/// Validates signup input and registers the account.
///
/// Checks run in a fixed order and the first failure wins:
/// `name`, `email`, `password`, `passwordConfirmation` presence, then the
/// confirmation match, then e-mail syntax.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn try_handle(&self, request: SignupRequest) -> anyhow::Result<HttpResponse<Account>> {
        let Some(name) = present(request.name) else {
            return Ok(missing("name"));
        };
        let Some(email) = present(request.email) else {
            return Ok(missing("email"));
        };
        let Some(password) = present(request.password) else {
            return Ok(missing("password"));
        };
        let Some(password_confirmation) = present(request.password_confirmation) else {
            return Ok(missing("passwordConfirmation"));
        };

        if password != password_confirmation {
            return Ok(invalid("passwordConfirmation"));
        }

        if !self.email_validator.is_valid(&email)? {
            return Ok(invalid("email"));
        }

        let account = self
            .add_account
            .add(AccountDraft::new(name, email, password))
            .await?;

        Ok(HttpResponse::ok(account))
    }
}

#[async_trait]
impl Controller for SignUpController {
    type Request = SignupRequest;
    type Output = Account;

    async fn handle(&self, request: SignupRequest) -> HttpResponse<Account> {
        match self.try_handle(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "Signup failed with a server error");
                HttpResponse::server_error(format!("{err:?}"))
            }
        }
    }
}

/// Empty strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn missing(field: &str) -> HttpResponse<Account> {
    HttpResponse::bad_request(ErrorDescriptor::missing_param(field))
}

fn invalid(field: &str) -> HttpResponse<Account> {
    HttpResponse::bad_request(ErrorDescriptor::invalid_param(field))
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use signup_shared::ErrorKind;

    use super::*;
    use crate::error::{AddAccountError, RepoError};
    use crate::ports::{EmailValidatorError, MockEmailValidator};
    use crate::usecases::MockAddAccount;

    fn valid_account() -> Account {
        Account {
            id: "valid_id".to_string(),
            name: "valid_name".to_string(),
            email: "valid_mail@mail.com".to_string(),
            password: "valid_passhere".to_string(),
        }
    }

    fn email_validator_accepting() -> MockEmailValidator {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().returning(|_| Ok(true));
        validator
    }

    fn add_account_returning_valid_account() -> MockAddAccount {
        let mut add_account = MockAddAccount::new();
        add_account
            .expect_add()
            .returning(|_| Ok(valid_account()));
        add_account
    }

    fn add_account_never_called() -> MockAddAccount {
        let mut add_account = MockAddAccount::new();
        add_account.expect_add().times(0);
        add_account
    }

    fn make_sut(validator: MockEmailValidator, add_account: MockAddAccount) -> SignUpController {
        SignUpController::new(Arc::new(validator), Arc::new(add_account))
    }

    fn valid_request() -> SignupRequest {
        SignupRequest::new("any_name", "email@mail.com", "passhere", "passhere")
    }

    fn assert_bad_request(response: &HttpResponse<Account>, kind: ErrorKind, field: &str) {
        assert_eq!(response.status_code, 400);
        let error = response.error().unwrap();
        assert_eq!(error.kind, kind);
        assert_eq!(error.field.as_deref(), Some(field));
    }

    #[tokio::test]
    async fn test_missing_name_returns_400() {
        let sut = make_sut(email_validator_accepting(), add_account_never_called());
        let request = SignupRequest {
            name: None,
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::MissingParam, "name");
        assert_eq!(response.error().unwrap().message, "Missing param: name");
    }

    #[tokio::test]
    async fn test_empty_name_counts_as_missing() {
        let sut = make_sut(email_validator_accepting(), add_account_never_called());
        let request = SignupRequest {
            name: Some(String::new()),
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::MissingParam, "name");
    }

    #[tokio::test]
    async fn test_missing_email_returns_400() {
        let sut = make_sut(email_validator_accepting(), add_account_never_called());
        let request = SignupRequest {
            email: None,
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::MissingParam, "email");
    }

    #[tokio::test]
    async fn test_missing_password_returns_400() {
        let sut = make_sut(email_validator_accepting(), add_account_never_called());
        let request = SignupRequest {
            password: None,
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::MissingParam, "password");
    }

    #[tokio::test]
    async fn test_missing_password_confirmation_returns_400() {
        let sut = make_sut(email_validator_accepting(), add_account_never_called());
        let request = SignupRequest {
            password_confirmation: None,
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::MissingParam, "passwordConfirmation");
    }

    #[tokio::test]
    async fn test_first_missing_field_wins() {
        let sut = make_sut(email_validator_accepting(), add_account_never_called());
        let request = SignupRequest {
            name: Some("any_name".to_string()),
            ..SignupRequest::default()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::MissingParam, "email");
    }

    #[tokio::test]
    async fn test_confirmation_mismatch_is_checked_before_email() {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().times(0);
        let sut = make_sut(validator, add_account_never_called());
        let request = SignupRequest {
            password_confirmation: Some("invalid_password".to_string()),
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::InvalidParam, "passwordConfirmation");
    }

    #[tokio::test]
    async fn test_invalid_email_returns_400() {
        let mut validator = MockEmailValidator::new();
        validator.expect_is_valid().returning(|_| Ok(false));
        let sut = make_sut(validator, add_account_never_called());
        let request = SignupRequest {
            email: Some("invalidEmail@mail.com".to_string()),
            ..valid_request()
        };

        let response = sut.handle(request).await;

        assert_bad_request(&response, ErrorKind::InvalidParam, "email");
    }

    #[tokio::test]
    async fn test_calls_email_validator_with_request_email() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .withf(|candidate| candidate == "email@mail.com")
            .times(1)
            .returning(|_| Ok(true));
        let sut = make_sut(validator, add_account_returning_valid_account());

        sut.handle(valid_request()).await;
    }

    #[tokio::test]
    async fn test_email_validator_failure_returns_500() {
        let mut validator = MockEmailValidator::new();
        validator
            .expect_is_valid()
            .returning(|_| Err(EmailValidatorError("regex engine unavailable".to_string())));
        let sut = make_sut(validator, add_account_never_called());

        let response = sut.handle(valid_request()).await;

        assert_eq!(response.status_code, 500);
        let error = response.error().unwrap();
        assert_eq!(error.kind, ErrorKind::ServerError);
        assert_eq!(error.field, None);
        assert!(
            error
                .stack
                .as_deref()
                .unwrap()
                .contains("regex engine unavailable")
        );
    }

    #[tokio::test]
    async fn test_calls_add_account_without_confirmation() {
        let mut seq = Sequence::new();
        let mut validator = MockEmailValidator::new();
        let mut add_account = MockAddAccount::new();
        validator
            .expect_is_valid()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        add_account
            .expect_add()
            .withf(|draft| *draft == AccountDraft::new("any_name", "email@mail.com", "passhere"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(valid_account()));
        let sut = make_sut(validator, add_account);

        sut.handle(valid_request()).await;
    }

    #[tokio::test]
    async fn test_add_account_failure_returns_500_without_detail() {
        let mut add_account = MockAddAccount::new();
        add_account.expect_add().returning(|_| {
            Err(AddAccountError::Persistence(RepoError::Connection(
                "connection refused".to_string(),
            )))
        });
        let sut = make_sut(email_validator_accepting(), add_account);

        let response = sut.handle(valid_request()).await;

        assert_eq!(response.status_code, 500);
        let body = serde_json::to_value(&response).unwrap();
        assert!(!body.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_valid_request_returns_200_with_account() {
        let sut = make_sut(email_validator_accepting(), add_account_returning_valid_account());

        let response = sut.handle(valid_request()).await;

        assert_eq!(response, HttpResponse::ok(valid_account()));
    }
}
