//! Transfer engine
//!
//! This module provides the TransferEngine that orchestrates a single atomic
//! transfer between two accounts: it validates the request, acquires both
//! account locks in a fixed order, checks sufficiency, records the transfer
//! through the journal, mutates both balances, and releases the locks on
//! every exit path.
//!
//! The engine enforces:
//! - Validation before any lock is acquired (self-transfer, negative amount,
//!   minimum transferable unit)
//! - Fixed lock ordering (source before destination) with guaranteed release
//! - All-or-nothing mutation: a `false` result means zero balance changes
//! - Journal-before-mutation ordering, so a successful return implies the
//!   ledger state and the external record agree

use crate::core::guard::LockedPair;
use crate::core::journal::TransferJournal;
use crate::types::{Account, LedgerError};

/// Smallest amount accepted by transfer validation, independent of the fee
pub const MIN_TRANSFER_AMOUNT: i64 = 100;

/// Fee charged to the source account when none is configured
pub const DEFAULT_FEE: u32 = 1;

/// Orchestrates single transfers between borrowed account pairs
///
/// Owns no account state; each [`TransferEngine::make`] call is a complete,
/// self-contained attempt touching exactly two accounts borrowed for the
/// call's duration. The journal is injected at construction and consulted
/// once per confirmed transfer.
pub struct TransferEngine {
    fee: i64,
    journal: Box<dyn TransferJournal>,
}

impl TransferEngine {
    /// Create an engine with the default fee
    pub fn new(journal: Box<dyn TransferJournal>) -> Self {
        Self::with_fee(DEFAULT_FEE, journal)
    }

    /// Create an engine with an explicit fee
    ///
    /// The fee is non-negative by construction; `u32` keeps invalid
    /// configurations unrepresentable.
    pub fn with_fee(fee: u32, journal: Box<dyn TransferJournal>) -> Self {
        TransferEngine {
            fee: i64::from(fee),
            journal,
        }
    }

    /// The fee currently charged on top of each transfer amount
    pub fn fee(&self) -> i64 {
        self.fee
    }

    /// Change the fee for subsequent transfers
    ///
    /// The fee is read once at the start of each `make` call, so changing it
    /// never affects an in-flight transfer.
    pub fn set_fee(&mut self, fee: u32) {
        self.fee = i64::from(fee);
    }

    /// Attempt to move `amount` from one account to another
    ///
    /// On success the destination is credited by `amount` and the source is
    /// debited by `amount + fee`. Both accounts end unlocked on every exit
    /// path.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the transfer completed and was journaled
    /// * `Ok(false)` - the transfer was declined: insufficient funds
    ///   (`balance < amount + fee`) or journal failure. Both balances are
    ///   unchanged.
    /// * `Err(LedgerError)` - the request was structurally invalid, or an
    ///   account was not in the expected lock state. No mutation occurred.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Source and destination share an id (`SelfTransfer`)
    /// - The amount is negative (`NegativeAmount`)
    /// - The amount is below [`MIN_TRANSFER_AMOUNT`] (`AmountBelowMinimum`)
    /// - Either account is already locked (`AlreadyLocked`)
    /// - A balance calculation would overflow (`BalanceOverflow`)
    ///
    /// Validation errors are raised before any lock is acquired, so a
    /// structurally invalid call never touches account state.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_transfer_engine::core::{TransferEngine, WriterJournal};
    /// use rust_transfer_engine::types::Account;
    ///
    /// let mut engine = TransferEngine::new(Box::new(WriterJournal::new(std::io::sink())));
    /// let mut from = Account::new(1, 1000);
    /// let mut to = Account::new(2, 500);
    ///
    /// assert!(engine.make(&mut from, &mut to, 300).unwrap());
    /// assert_eq!(from.balance(), 699);
    /// assert_eq!(to.balance(), 800);
    /// ```
    pub fn make(
        &mut self,
        from: &mut Account,
        to: &mut Account,
        amount: i64,
    ) -> Result<bool, LedgerError> {
        // Validation, in fixed order, before any lock is acquired
        if from.id() == to.id() {
            return Err(LedgerError::self_transfer(from.id()));
        }
        if amount < 0 {
            return Err(LedgerError::negative_amount(amount));
        }
        if amount < MIN_TRANSFER_AMOUNT {
            return Err(LedgerError::amount_below_minimum(amount, MIN_TRANSFER_AMOUNT));
        }

        // Fee is read once per call; later set_fee calls only affect
        // subsequent transfers
        let fee = self.fee;

        // Locks are held from here until the pair drops, on every exit path
        let mut pair = LockedPair::acquire(from, to)?;

        let required = amount
            .checked_add(fee)
            .ok_or_else(|| LedgerError::balance_overflow(pair.source().id()))?;

        // Insufficient funds is an expected outcome, not an error
        if pair.source().balance() < required {
            return Ok(false);
        }

        // Record before mutating: an unwritten record means the transfer
        // did not happen
        if self
            .journal
            .record(pair.source(), pair.destination(), amount)
            .is_err()
        {
            return Ok(false);
        }

        pair.destination_mut().change_balance(amount)?;
        pair.source_mut().change_balance(-required)?;

        Ok(true)
    }
}
