//! Acolher API - account directory service
//!
//! REST backend managing the user accounts of the Acolher social-support
//! platform: registration with unique CPF and email, lookup, full update,
//! deactivation, password change, login and deletion.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Account entity and password rules
//! - **services**: Account directory use cases
//! - **infra**: Database, migrations and the account store
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, Password};
pub use errors::{AppError, AppResult};
