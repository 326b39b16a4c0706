//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new account.
///
/// Every field is optional on the wire. Presence is decided by the signup
/// controller so that an omitted field yields `MissingParam` instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

impl SignupRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            password_confirmation: Some(password_confirmation.into()),
        }
    }
}
