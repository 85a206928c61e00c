//! Account repository - persistence of account records.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::account::{self, ActiveModel, Entity as AccountEntity};
use crate::domain::{Account, NewAccount};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find account by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Account>>;

    /// Find account by CPF
    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Account>>;

    /// Find account by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// List all accounts, active or not
    async fn list(&self) -> AppResult<Vec<Account>>;

    /// Insert a new account; the store assigns the id.
    /// Fails with `Conflict` if the CPF or email is already taken.
    async fn create(&self, account: NewAccount) -> AppResult<Account>;

    /// Overwrite every mutable field of an existing account.
    /// Fails with `NotFound` if the row is gone.
    async fn update(&self, account: Account) -> AppResult<Account>;

    /// Permanently remove the account
    async fn hard_delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Translate a failed write into an application error, reporting unique
/// constraint violations as conflicts on the offending field.
fn map_write_error(err: DbErr) -> AppError {
    let detail = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => detail,
        _ => {
            let message = err.to_string();
            if !message.contains("UNIQUE") && !message.contains("duplicate key") {
                return AppError::from(err);
            }
            message
        }
    }
    .to_lowercase();

    if detail.contains("cpf") {
        AppError::conflict("CPF")
    } else if detail.contains("email") {
        AppError::conflict("Email")
    } else {
        AppError::conflict("Account")
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn list(&self) -> AppResult<Vec<Account>> {
        let models = AccountEntity::find()
            .order_by_asc(account::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Account::from).collect())
    }

    async fn create(&self, account: NewAccount) -> AppResult<Account> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: NotSet,
            cpf: Set(account.cpf),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(map_write_error)?;
        Ok(Account::from(model))
    }

    async fn update(&self, account: Account) -> AppResult<Account> {
        let existing = AccountEntity::find_by_id(account.id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.cpf = Set(account.cpf);
        active.email = Set(account.email);
        active.password_hash = Set(account.password_hash);
        active.active = Set(account.active);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(map_write_error)?;
        Ok(Account::from(model))
    }

    async fn hard_delete(&self, id: i32) -> AppResult<()> {
        let result = AccountEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_constraint_error_is_database_error() {
        let err = map_write_error(DbErr::RecordNotUpdated);
        assert!(matches!(err, AppError::Database(_)));
    }
}
