//! Account type for the transfer engine
//!
//! This module defines the Account structure: an exclusively-owned balance
//! cell guarded by an explicit lock flag.
//!
//! The lock flag is a cooperative misuse guard, not a scheduler primitive.
//! It exists so that "balance mutated outside a held exclusivity window" is
//! a detectable programming error instead of a silent corruption. It is not
//! reentrant and not thread-safe; concurrent access from independent threads
//! requires an external mutual-exclusion layer.

use crate::types::{AccountId, LedgerError};

/// A mutable account balance with an exclusivity guard
///
/// The balance can only be mutated while the account is locked. Fields are
/// private so every mutation goes through the guarded methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Immutable identity, fixed at creation
    id: AccountId,

    /// Current balance in integer units
    ///
    /// May go negative only via direct mutation under a held lock; the
    /// transfer engine itself never overdraws an account.
    balance: i64,

    /// Exclusivity flag, false on creation
    locked: bool,
}

impl Account {
    /// Create a new account with the given id and opening balance
    ///
    /// The account starts unlocked.
    pub fn new(id: AccountId, balance: i64) -> Self {
        Account {
            id,
            balance,
            locked: false,
        }
    }

    /// Immutable identity accessor
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Current balance; no precondition, no side effect
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Whether the account is currently locked
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Acquire exclusivity
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if the account is already locked. The flag is
    /// not toggled on failure.
    pub fn lock(&mut self) -> Result<(), LedgerError> {
        if self.locked {
            return Err(LedgerError::already_locked(self.id));
        }
        self.locked = true;
        Ok(())
    }

    /// Release exclusivity unconditionally
    ///
    /// Idempotent: unlocking an already-unlocked account is a no-op, never
    /// an error.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Add `delta` to the balance (delta may be negative)
    ///
    /// No sufficiency check happens here; the caller is responsible for not
    /// overdrawing.
    ///
    /// # Errors
    ///
    /// Returns `NotLocked` if the account is not locked, or
    /// `BalanceOverflow` if the addition would overflow i64. The balance is
    /// unchanged in both cases.
    pub fn change_balance(&mut self, delta: i64) -> Result<(), LedgerError> {
        if !self.locked {
            return Err(LedgerError::not_locked(self.id));
        }

        self.balance = self
            .balance
            .checked_add(delta)
            .ok_or_else(|| LedgerError::balance_overflow(self.id))?;

        Ok(())
    }
}
