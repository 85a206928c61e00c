//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::{AccountStore, Database};
use crate::services::{AccountDirectory, AccountService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Account directory
    pub account_service: Arc<dyn AccountService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM account store into the account directory.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(AccountStore::new(database.get_connection()));
        let account_service = Arc::new(AccountDirectory::new(store));

        Self {
            account_service,
            database,
        }
    }
}
