//! Scoped lock acquisition over an account pair
//!
//! The engine must release both account locks on every exit path, including
//! early returns and propagated errors. `LockedPair` expresses that as a
//! scoped-acquisition wrapper: locks are taken on construction and released
//! in `Drop`.
//!
//! Lock ordering is fixed: source before destination on acquisition, the
//! reverse on release. A fixed global order over the pair is what keeps the
//! design deadlock-free if callers are ever layered behind an external mutex
//! per account.

use crate::types::{Account, LedgerError};

/// A pair of accounts held under their exclusivity locks
///
/// Constructed via [`LockedPair::acquire`]; both locks are released when the
/// pair goes out of scope. Unlock idempotence makes the drop path infallible.
#[derive(Debug)]
pub struct LockedPair<'a> {
    from: &'a mut Account,
    to: &'a mut Account,
}

impl<'a> LockedPair<'a> {
    /// Lock `from`, then `to`, in that fixed order
    ///
    /// # Errors
    ///
    /// Returns `AlreadyLocked` if either account is already locked. If the
    /// second lock fails, the first is released before the error propagates,
    /// so a failed acquisition never leaves a lock behind.
    pub fn acquire(from: &'a mut Account, to: &'a mut Account) -> Result<Self, LedgerError> {
        from.lock()?;
        if let Err(err) = to.lock() {
            from.unlock();
            return Err(err);
        }
        Ok(LockedPair { from, to })
    }

    /// The source account
    pub fn source(&self) -> &Account {
        self.from
    }

    /// The source account, mutably
    pub fn source_mut(&mut self) -> &mut Account {
        self.from
    }

    /// The destination account
    pub fn destination(&self) -> &Account {
        self.to
    }

    /// The destination account, mutably
    pub fn destination_mut(&mut self) -> &mut Account {
        self.to
    }
}

impl Drop for LockedPair<'_> {
    /// Release destination then source, the reverse of acquisition order
    fn drop(&mut self) {
        self.to.unlock();
        self.from.unlock();
    }
}
