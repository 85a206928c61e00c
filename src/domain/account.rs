//! Account domain entity and related types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::Password;

/// Account domain entity
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: i32,
    /// National taxpayer registry number (unique)
    pub cpf: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// `false` once the account has been deactivated
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check a plain text password against the stored hash
    pub fn password_matches(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(plain_text)
    }

    /// Replace the stored password
    pub fn set_password(&mut self, password: Password) {
        self.password_hash = password.into_string();
        self.updated_at = Utc::now();
    }

    /// Soft delete: the record stays, flagged inactive
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

/// Data for an account that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub cpf: String,
    pub email: String,
    pub password_hash: String,
}

/// Account response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccountResponse {
    /// Store-assigned account identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "12345678909")]
    pub cpf: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
    #[schema(example = true)]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            cpf: account.cpf,
            email: account.email,
            active: account.active,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}
