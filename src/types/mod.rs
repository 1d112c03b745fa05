//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the guarded balance cell
//! - `record`: parsed input records and identifiers
//! - `error`: error types for the transfer engine

pub mod account;
pub mod error;
pub mod record;

pub use account::Account;
pub use error::LedgerError;
pub use record::{AccountId, LedgerRecord};
