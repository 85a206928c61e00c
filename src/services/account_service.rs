//! Account directory - account lifecycle, uniqueness and credential rules.
//!
//! Every operation is a validation step plus a single repository call.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_INCORRECT_CURRENT_PASSWORD, MSG_INVALID_LOGIN, MSG_INVALID_NEW_PASSWORD};
use crate::domain::{Account, NewAccount, Password};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::AccountRepository;

/// Full replacement of an account's mutable fields
#[derive(Debug, Clone)]
pub struct AccountUpdate {
    pub id: i32,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub active: bool,
}

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// List every account, active or not
    async fn list(&self) -> AppResult<Vec<Account>>;

    /// Get account by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Account>;

    /// Get account by CPF
    async fn get_by_cpf(&self, cpf: &str) -> AppResult<Account>;

    /// Get account by email
    async fn get_by_email(&self, email: &str) -> AppResult<Account>;

    /// Register a new account. CPF is checked before email.
    async fn create(&self, cpf: String, email: String, password: String) -> AppResult<Account>;

    /// Overwrite an existing account
    async fn update(&self, update: AccountUpdate) -> AppResult<Account>;

    /// Soft delete: flag the account inactive
    async fn deactivate(&self, id: i32) -> AppResult<Account>;

    /// Replace the password after checking the current one
    async fn change_password(
        &self,
        id: i32,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()>;

    /// Return the account matching the credentials
    async fn login(&self, email: &str, password: &str) -> AppResult<Account>;

    /// Permanently remove the account
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of AccountService over an injected repository.
pub struct AccountDirectory {
    repo: Arc<dyn AccountRepository>,
}

impl AccountDirectory {
    /// Create new account service with repository
    pub fn new(repo: Arc<dyn AccountRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl AccountService for AccountDirectory {
    async fn list(&self) -> AppResult<Vec<Account>> {
        tracing::debug!("Listing accounts");
        self.repo.list().await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Account> {
        tracing::debug!(id, "Fetching account by id");
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_by_cpf(&self, cpf: &str) -> AppResult<Account> {
        tracing::debug!(cpf, "Fetching account by cpf");
        self.repo.find_by_cpf(cpf).await?.ok_or_not_found()
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Account> {
        tracing::debug!(email, "Fetching account by email");
        self.repo.find_by_email(email).await?.ok_or_not_found()
    }

    async fn create(&self, cpf: String, email: String, password: String) -> AppResult<Account> {
        tracing::debug!(cpf = %cpf, email = %email, "Creating account");

        if self.repo.find_by_cpf(&cpf).await?.is_some() {
            return Err(AppError::conflict("CPF"));
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let account = self
            .repo
            .create(NewAccount {
                cpf,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(id = account.id, "Account created");
        Ok(account)
    }

    async fn update(&self, update: AccountUpdate) -> AppResult<Account> {
        tracing::debug!(id = update.id, "Updating account");

        let mut account = self.repo.find_by_id(update.id).await?.ok_or_not_found()?;
        let password = Password::new(&update.password)?;

        account.cpf = update.cpf;
        account.email = update.email;
        account.active = update.active;
        account.set_password(password);

        self.repo.update(account).await
    }

    async fn deactivate(&self, id: i32) -> AppResult<Account> {
        tracing::debug!(id, "Deactivating account");

        let mut account = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        account.deactivate();

        let account = self.repo.update(account).await?;
        tracing::info!(id, "Account deactivated");
        Ok(account)
    }

    async fn change_password(
        &self,
        id: i32,
        old_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        tracing::debug!(id, "Changing account password");

        let mut account = match self.repo.find_by_id(id).await? {
            Some(account) if account.password_matches(old_password) => account,
            _ => return Err(AppError::forbidden(MSG_INCORRECT_CURRENT_PASSWORD)),
        };

        if !Password::is_acceptable(new_password) {
            return Err(AppError::forbidden(MSG_INVALID_NEW_PASSWORD));
        }

        account.set_password(Password::new(new_password)?);
        self.repo.update(account).await?;
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<Account> {
        tracing::debug!(email, "Login attempt");

        match self.repo.find_by_email(email).await? {
            Some(account) if account.password_matches(password) => Ok(account),
            Some(_) => Err(AppError::forbidden(MSG_INVALID_LOGIN)),
            None => {
                // Same hashing cost as a wrong password, so response time
                // does not reveal which emails are registered.
                let _ = Password::dummy().verify(password);
                Err(AppError::forbidden(MSG_INVALID_LOGIN))
            }
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        tracing::debug!(id, "Deleting account");

        self.repo.find_by_id(id).await?.ok_or_not_found()?;
        self.repo.hard_delete(id).await?;

        tracing::info!(id, "Account deleted");
        Ok(())
    }
}
