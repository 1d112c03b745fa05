//! Persistence port for transfer records
//!
//! The engine records every confirmed transfer through a [`TransferJournal`]
//! before mutating balances. A journal failure aborts the transfer, so a
//! successful transfer implies the ledger state and the external record
//! agree.
//!
//! The trait is injected at engine construction: production wires a
//! [`WriterJournal`] over stdout or a file, tests substitute doubles through
//! the same seam.

use crate::types::{Account, LedgerError};
use std::io::Write;

/// Capability to durably record a transfer
///
/// Called by the engine after the sufficiency check and before any balance
/// mutation. An `Err` return aborts the transfer; the engine converts it
/// into a `false` result, so implementations never surface their own error
/// to the engine's caller.
pub trait TransferJournal {
    /// Record one transfer of `amount` from `from` to `to`
    ///
    /// Invoked pre-mutation: the accounts carry their pre-transfer balances.
    fn record(&mut self, from: &Account, to: &Account, amount: i64) -> Result<(), LedgerError>;
}

/// Reference journal writing three lines per transfer to a textual sink
///
/// The record format is:
///
/// ```text
/// {from} send to {to} ${amount}
/// Balance {from} is {balance}
/// Balance {to} is {balance}
/// ```
///
/// The balance lines show the balances observed at call time, which is
/// before the transfer mutates either account.
#[derive(Debug)]
pub struct WriterJournal<W: Write> {
    sink: W,
}

impl<W: Write> WriterJournal<W> {
    /// Create a journal over the given sink
    pub fn new(sink: W) -> Self {
        WriterJournal { sink }
    }
}

impl<W: Write> TransferJournal for WriterJournal<W> {
    fn record(&mut self, from: &Account, to: &Account, amount: i64) -> Result<(), LedgerError> {
        writeln!(self.sink, "{} send to {} ${}", from.id(), to.id(), amount)?;
        writeln!(self.sink, "Balance {} is {}", from.id(), from.balance())?;
        writeln!(self.sink, "Balance {} is {}", to.id(), to.balance())?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_writer_journal_emits_three_lines() {
        let mut buffer = Vec::new();
        {
            let mut journal = WriterJournal::new(&mut buffer);
            let from = Account::new(1, 1000);
            let to = Account::new(2, 500);

            journal.record(&from, &to, 300).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "1 send to 2 $300\nBalance 1 is 1000\nBalance 2 is 500\n"
        );
    }

    #[test]
    fn test_writer_journal_appends_successive_records() {
        let mut buffer = Vec::new();
        {
            let mut journal = WriterJournal::new(&mut buffer);
            let from = Account::new(1, 1000);
            let to = Account::new(2, 500);

            journal.record(&from, &to, 300).unwrap();
            journal.record(&to, &from, 150).unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "1 send to 2 $300");
        assert_eq!(lines[3], "2 send to 1 $150");
    }

    /// A writer that fails on every write
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink is broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_journal_surfaces_io_errors() {
        let mut journal = WriterJournal::new(BrokenSink);
        let from = Account::new(1, 1000);
        let to = Account::new(2, 500);

        let result = journal.record(&from, &to, 300);
        assert!(matches!(result, Err(LedgerError::Io { .. })));
    }
}
