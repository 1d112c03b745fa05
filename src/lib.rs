//! Transfer Engine Library
//! # Overview
//!
//! This library implements a minimal ledger primitive: mutable account
//! balances and a single atomic transfer operation that moves funds between
//! two accounts while charging a fee, under a pessimistic per-account
//! exclusivity guard. A CSV batch pipeline drives the primitive from input
//! files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, LedgerRecord, LedgerError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Single-transfer orchestration
//!   - [`core::guard`] - Scoped lock acquisition over an account pair
//!   - [`core::journal`] - Persistence port for transfer records
//!   - [`core::ledger`] - Account book owning all accounts
//! - [`io`] - CSV reading and balance output
//! - [`batch`] - The batch processing pipeline
//!
//! # Transfer Semantics
//!
//! A transfer moves `amount` from a source to a destination account and
//! deducts an additional flat `fee` from the source. The engine:
//!
//! - Validates before touching any account state (self-transfer, negative
//!   amount, minimum transferable unit of 100)
//! - Locks source then destination, releasing in reverse order on every
//!   exit path
//! - Declines (rather than errors) on insufficient funds or journal failure,
//!   leaving both balances untouched
//! - Records through the journal before mutating, so a successful transfer
//!   implies ledger state and the external record agree

// Module declarations
pub mod batch;
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    Ledger, LockedPair, TransferEngine, TransferJournal, WriterJournal, DEFAULT_FEE,
    MIN_TRANSFER_AMOUNT,
};
pub use crate::io::write_balances_csv;
pub use crate::types::{Account, AccountId, LedgerError, LedgerRecord};
