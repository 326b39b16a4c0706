use serde::{Deserialize, Serialize};

/// Account entity - a persisted registration.
///
/// `password` holds the digest, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account data before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Same draft with the password replaced by `digest`.
    pub fn with_password(self, digest: String) -> Self {
        Self {
            password: digest,
            ..self
        }
    }

    /// Attach a store-assigned id.
    pub fn into_account(self, id: impl Into<String>) -> Account {
        Account {
            id: id.into(),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
