//! Domain layer - Core business entities and logic
//!
//! This module contains the account model and the password rules,
//! independent of persistence and HTTP concerns.

pub mod account;
pub mod password;

pub use account::{Account, AccountResponse, NewAccount};
pub use password::Password;
