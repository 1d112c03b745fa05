//! Input record types for the transfer engine
//!
//! This module defines the parsed form of a CSV input row. Row-shape
//! validation (which columns must be present for which record type) lives in
//! the `io::csv_format` conversion; by the time a `LedgerRecord` exists it is
//! structurally complete.

/// Account identifier
///
/// Supports account ids from 0 to 4,294,967,295
pub type AccountId = u32;

/// A parsed input record from the batch CSV
///
/// Two row shapes exist: `open` seeds an account with an opening balance,
/// `transfer` runs one engine transfer between two existing accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerRecord {
    /// Open an account with the given opening balance
    ///
    /// Opening balances may be any i64, including negative values; seeding
    /// bypasses the engine's sufficiency checks.
    Open {
        /// Id of the account to create
        account: AccountId,
        /// Opening balance in integer units
        balance: i64,
    },

    /// Move `amount` from one account to another through the engine
    ///
    /// The engine charges its configured fee to the source on top of the
    /// amount.
    Transfer {
        /// Source account id
        from: AccountId,
        /// Destination account id
        to: AccountId,
        /// Transfer amount in integer units
        amount: i64,
    },
}
