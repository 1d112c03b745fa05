//! Ledger account book
//!
//! This module provides the `Ledger` struct which owns all accounts in a
//! batch run and hands out the disjoint mutable pairs the transfer engine
//! operates on.
//!
//! The Ledger is responsible for:
//! - Opening accounts with explicit opening balances
//! - Rejecting duplicate account ids
//! - Resolving (from, to) id pairs to mutable account references
//! - Providing sorted account listings for output

use crate::types::{Account, AccountId, LedgerError};
use std::collections::HashMap;

/// Owns all accounts, keyed by id
///
/// Unlike a deposit-driven store, accounts here are opened explicitly with a
/// seed balance; a transfer touching an id that was never opened is an
/// error, not an implicit account creation.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
        }
    }

    /// Open an account with the given opening balance
    ///
    /// Opening balances may be any i64; seeding bypasses the engine's
    /// sufficiency checks.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the id is already present; the existing
    /// account is untouched.
    pub fn open(&mut self, id: AccountId, balance: i64) -> Result<(), LedgerError> {
        if self.accounts.contains_key(&id) {
            return Err(LedgerError::duplicate_account(id));
        }
        self.accounts.insert(id, Account::new(id, balance));
        Ok(())
    }

    /// Look up an account by id
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    /// Resolve a (from, to) pair to disjoint mutable references
    ///
    /// # Errors
    ///
    /// Returns `SelfTransfer` when the ids are equal and `UnknownAccount`
    /// for a missing side. The equal-id case is rejected first, which also
    /// upholds the disjointness precondition of the underlying map lookup.
    pub fn pair_mut(
        &mut self,
        from: AccountId,
        to: AccountId,
    ) -> Result<(&mut Account, &mut Account), LedgerError> {
        if from == to {
            return Err(LedgerError::self_transfer(from));
        }

        match self.accounts.get_disjoint_mut([&from, &to]) {
            [Some(source), Some(destination)] => Ok((source, destination)),
            [None, _] => Err(LedgerError::unknown_account(from)),
            [_, None] => Err(LedgerError::unknown_account(to)),
        }
    }

    /// All accounts sorted by id
    ///
    /// Sorting provides deterministic output for CSV generation.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.id());
        accounts
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
