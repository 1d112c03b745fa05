//! Batch processing pipeline
//!
//! Orchestrates a complete batch run: stream ledger records from a CSV file,
//! apply opens to the ledger and transfers through the engine, then write
//! the final balances as CSV.
//!
//! # Error Handling
//!
//! Fatal errors (file not found, I/O errors) are returned immediately.
//! Individual record failures — parse errors, validation errors, declined
//! transfers — are logged to stderr and processing continues with the next
//! record.

use crate::core::{Ledger, TransferEngine, TransferJournal};
use crate::io::csv_format::write_balances_csv;
use crate::io::sync_reader::SyncReader;
use crate::types::{Account, LedgerError, LedgerRecord};
use std::io::Write;
use std::path::Path;

/// Process a batch file and write final balances to output
///
/// This function orchestrates the complete pipeline:
/// 1. Creates a SyncReader to stream records from the CSV file
/// 2. Creates a Ledger and a TransferEngine over the given journal
/// 3. Iterates through records, applying each
/// 4. Writes final balances to output as CSV, sorted by account id
///
/// # Arguments
///
/// * `input_path` - Path to the input CSV file
/// * `journal` - Persistence sink for confirmed transfers
/// * `output` - Writer receiving the final balances CSV
/// * `fee` - Flat fee charged to the source account per transfer
///
/// # Returns
///
/// * `Ok(())` if processing completed (possibly with recoverable per-record
///   failures logged to stderr)
/// * `Err(String)` if a fatal error occurred
pub fn process_file(
    input_path: &Path,
    journal: Box<dyn TransferJournal>,
    output: &mut dyn Write,
    fee: u32,
) -> Result<(), String> {
    let mut ledger = Ledger::new();
    let mut engine = TransferEngine::with_fee(fee, journal);

    let reader = SyncReader::new(input_path)?;

    for result in reader {
        match result {
            Ok(record) => {
                if let Err(e) = apply_record(&mut ledger, &mut engine, &record) {
                    eprintln!("Record processing error: {}", e);
                }
            }
            Err(e) => {
                eprintln!("CSV parsing error: {}", e);
            }
        }
    }

    let accounts: Vec<Account> = ledger.accounts().into_iter().cloned().collect();
    write_balances_csv(&accounts, output)?;

    Ok(())
}

/// Apply one parsed record to the ledger
///
/// Opens go straight to the ledger; transfers resolve their account pair
/// and run through the engine. A declined transfer (insufficient funds or
/// journal failure) is logged and is not an error.
fn apply_record(
    ledger: &mut Ledger,
    engine: &mut TransferEngine,
    record: &LedgerRecord,
) -> Result<(), LedgerError> {
    match *record {
        LedgerRecord::Open { account, balance } => ledger.open(account, balance),
        LedgerRecord::Transfer { from, to, amount } => {
            let (source, destination) = ledger.pair_mut(from, to)?;
            if !engine.make(source, destination, amount)? {
                eprintln!("Transfer declined: {} -> {} amount {}", from, to, amount);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WriterJournal;
    use std::io;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn sink_journal() -> Box<dyn TransferJournal> {
        Box::new(WriterJournal::new(io::sink()))
    }

    #[test]
    fn test_process_file_runs_opens_and_transfers() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,1000\n\
            open,2,,500\n\
            transfer,1,2,300\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,699\n2,800\n");
    }

    #[test]
    fn test_process_file_fails_on_missing_file() {
        let mut output = Vec::new();
        let result = process_file(Path::new("nonexistent.csv"), sink_journal(), &mut output, 1);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_process_file_continues_on_malformed_record() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,1000\n\
            open,2,,invalid\n\
            open,3,,50\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,1000\n3,50\n");
    }

    #[test]
    fn test_process_file_continues_on_validation_error() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,1000\n\
            open,2,,500\n\
            transfer,1,1,300\n\
            transfer,1,2,300\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        // The self-transfer row was rejected; the valid transfer still ran
        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,699\n2,800\n");
    }

    #[test]
    fn test_process_file_keeps_balances_on_declined_transfer() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,100\n\
            open,2,,0\n\
            transfer,1,2,100\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,100\n2,0\n");
    }

    #[test]
    fn test_process_file_ignores_duplicate_open() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,1000\n\
            open,1,,500\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,1000\n");
    }

    #[test]
    fn test_process_file_skips_transfer_to_unknown_account() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,1000\n\
            transfer,1,2,300\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,1000\n");
    }

    #[test]
    fn test_process_file_applies_configured_fee() {
        let csv_content = "type,account,counterparty,amount\n\
            open,1,,1000\n\
            open,2,,0\n\
            transfer,1,2,100\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 5);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n1,895\n2,100\n");
    }

    #[test]
    fn test_process_file_empty_batch_writes_header_only() {
        let csv_content = "type,account,counterparty,amount\n";
        let file = create_temp_csv(csv_content);

        let mut output = Vec::new();
        let result = process_file(file.path(), sink_journal(), &mut output, 1);
        assert!(result.is_ok());

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str, "account,balance\n");
    }
}
