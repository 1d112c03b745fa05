//! Error types for the transfer engine
//!
//! This module defines all error types that can occur while operating on
//! accounts and processing transfer batches.
//!
//! # Error Categories
//!
//! - **Validation Errors**: self-transfer, negative amount, amount below the
//!   minimum transferable unit. Raised before any account state changes.
//! - **Account Misuse Errors**: locking an already-locked account, mutating
//!   the balance of an unlocked account. Raised by `Account`; if one surfaces
//!   from inside the engine's own acquisition/mutation sequence it indicates
//!   an engine bug and is not recovered.
//! - **Ledger Errors**: duplicate account ids, transfers referencing unknown
//!   accounts.
//! - **Arithmetic Errors**: i64 overflow in balance calculations.
//! - **I/O and Parse Errors**: file access and CSV structure problems from
//!   the batch pipeline.
//!
//! Insufficient funds and journal failures are deliberately absent here:
//! both are expected outcomes, reported as a `false` transfer result rather
//! than an error.

use crate::types::AccountId;
use thiserror::Error;

/// Main error type for the transfer engine
///
/// This enum represents all possible errors that can occur while mutating
/// accounts, running transfers, or processing a CSV batch. Each variant
/// includes relevant context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Source and destination of a transfer are the same account
    ///
    /// Raised before any lock is acquired; account state is untouched.
    #[error("Cannot transfer from account {account} to itself")]
    SelfTransfer {
        /// The account id appearing on both sides
        account: AccountId,
    },

    /// Transfer amount is negative
    ///
    /// Raised before any lock is acquired; account state is untouched.
    #[error("Transfer amount cannot be negative, got {amount}")]
    NegativeAmount {
        /// The rejected amount
        amount: i64,
    },

    /// Transfer amount is below the minimum transferable unit
    ///
    /// Raised before any lock is acquired; account state is untouched.
    #[error("Transfer amount {amount} is below the minimum of {minimum}")]
    AmountBelowMinimum {
        /// The rejected amount
        amount: i64,
        /// The smallest amount accepted by validation
        minimum: i64,
    },

    /// Attempt to lock an account that is already locked
    ///
    /// Locking is not reentrant; a second lock is a usage error, not a
    /// silent no-op.
    #[error("Account {account} is already locked")]
    AlreadyLocked {
        /// The account that was already locked
        account: AccountId,
    },

    /// Attempt to mutate the balance of an unlocked account
    ///
    /// Balance mutation requires a held lock.
    #[error("Account {account} is not locked")]
    NotLocked {
        /// The account that was not locked
        account: AccountId,
    },

    /// Arithmetic overflow in a balance calculation
    ///
    /// The affected balance is left unchanged.
    #[error("Balance overflow on account {account}")]
    BalanceOverflow {
        /// The account whose balance calculation overflowed
        account: AccountId,
    },

    /// An account with this id already exists in the ledger
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// The colliding account id
        account: AccountId,
    },

    /// A transfer referenced an account the ledger does not hold
    #[error("Unknown account {account}")]
    UnknownAccount {
        /// The missing account id
        account: AccountId,
    },

    /// I/O error occurred while reading input or writing a journal record
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a SelfTransfer error
    pub fn self_transfer(account: AccountId) -> Self {
        LedgerError::SelfTransfer { account }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(amount: i64) -> Self {
        LedgerError::NegativeAmount { amount }
    }

    /// Create an AmountBelowMinimum error
    pub fn amount_below_minimum(amount: i64, minimum: i64) -> Self {
        LedgerError::AmountBelowMinimum { amount, minimum }
    }

    /// Create an AlreadyLocked error
    pub fn already_locked(account: AccountId) -> Self {
        LedgerError::AlreadyLocked { account }
    }

    /// Create a NotLocked error
    pub fn not_locked(account: AccountId) -> Self {
        LedgerError::NotLocked { account }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(account: AccountId) -> Self {
        LedgerError::BalanceOverflow { account }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountId) -> Self {
        LedgerError::DuplicateAccount { account }
    }

    /// Create an UnknownAccount error
    pub fn unknown_account(account: AccountId) -> Self {
        LedgerError::UnknownAccount { account }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::self_transfer(
        LedgerError::SelfTransfer { account: 1 },
        "Cannot transfer from account 1 to itself"
    )]
    #[case::negative_amount(
        LedgerError::NegativeAmount { amount: -50 },
        "Transfer amount cannot be negative, got -50"
    )]
    #[case::amount_below_minimum(
        LedgerError::AmountBelowMinimum { amount: 99, minimum: 100 },
        "Transfer amount 99 is below the minimum of 100"
    )]
    #[case::already_locked(
        LedgerError::AlreadyLocked { account: 42 },
        "Account 42 is already locked"
    )]
    #[case::not_locked(
        LedgerError::NotLocked { account: 7 },
        "Account 7 is not locked"
    )]
    #[case::balance_overflow(
        LedgerError::BalanceOverflow { account: 3 },
        "Balance overflow on account 3"
    )]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { account: 9 },
        "Account 9 already exists"
    )]
    #[case::unknown_account(
        LedgerError::UnknownAccount { account: 2 },
        "Unknown account 2"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::Parse { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::Parse { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::self_transfer(
        LedgerError::self_transfer(1),
        LedgerError::SelfTransfer { account: 1 }
    )]
    #[case::negative_amount(
        LedgerError::negative_amount(-1),
        LedgerError::NegativeAmount { amount: -1 }
    )]
    #[case::amount_below_minimum(
        LedgerError::amount_below_minimum(99, 100),
        LedgerError::AmountBelowMinimum { amount: 99, minimum: 100 }
    )]
    #[case::already_locked(
        LedgerError::already_locked(42),
        LedgerError::AlreadyLocked { account: 42 }
    )]
    #[case::not_locked(
        LedgerError::not_locked(7),
        LedgerError::NotLocked { account: 7 }
    )]
    #[case::unknown_account(
        LedgerError::unknown_account(2),
        LedgerError::UnknownAccount { account: 2 }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
