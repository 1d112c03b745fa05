//! Core business logic module
//!
//! This module contains the transfer processing components:
//! - `engine` - the single-transfer orchestration
//! - `guard` - scoped lock acquisition over an account pair
//! - `journal` - the persistence port and its reference writer
//! - `ledger` - the account book owning all accounts in a batch run

pub mod engine;
pub mod guard;
pub mod journal;
pub mod ledger;

pub use engine::{TransferEngine, DEFAULT_FEE, MIN_TRANSFER_AMOUNT};
pub use guard::LockedPair;
pub use journal::{TransferJournal, WriterJournal};
pub use ledger::Ledger;
