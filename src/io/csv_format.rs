//! CSV format handling for ledger records and balance output
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain types
//! - Balance output serialization
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Input format
//!
//! Columns: `type,account,counterparty,amount`
//!
//! - `open,<id>,,<balance>` opens an account with the given opening balance
//! - `transfer,<from>,<to>,<amount>` runs one transfer through the engine

use crate::types::{Account, AccountId, LedgerRecord};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: type, account, counterparty,
/// amount. Counterparty is optional because open rows have none; amount is
/// kept as a string so malformed values produce row-level errors instead of
/// aborting deserialization.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub account: AccountId,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
}

/// Convert a CsvRecord to a LedgerRecord
///
/// This function:
/// - Parses the record type string (case-insensitive)
/// - Parses the amount string into an i64 (opening balance or transfer
///   amount)
/// - Validates that transfer rows carry a counterparty
///
/// A counterparty on an open row is meaningless and ignored, mirroring how
/// lenient row handling keeps a batch flowing.
///
/// # Arguments
///
/// * `csv_record` - The deserialized CSV record
///
/// # Returns
///
/// Result containing either:
/// - Ok(LedgerRecord) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<LedgerRecord, String> {
    // Parse amount if present
    let amount = match csv_record.amount {
        Some(ref amount_str) if !amount_str.trim().is_empty() => {
            match amount_str.trim().parse::<i64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    return Err(format!(
                        "Invalid amount '{}' for account {}",
                        amount_str, csv_record.account
                    ))
                }
            }
        }
        _ => None,
    };

    match csv_record.record_type.to_lowercase().as_str() {
        "open" => {
            let balance = amount.ok_or_else(|| {
                format!(
                    "open record for account {} requires an opening balance",
                    csv_record.account
                )
            })?;

            Ok(LedgerRecord::Open {
                account: csv_record.account,
                balance,
            })
        }
        "transfer" => {
            let to = match csv_record.counterparty {
                Some(ref to_str) if !to_str.trim().is_empty() => {
                    to_str.trim().parse::<AccountId>().map_err(|_| {
                        format!(
                            "Invalid counterparty '{}' for account {}",
                            to_str, csv_record.account
                        )
                    })?
                }
                _ => {
                    return Err(format!(
                        "transfer record for account {} requires a counterparty",
                        csv_record.account
                    ))
                }
            };

            let amount = amount.ok_or_else(|| {
                format!(
                    "transfer record for account {} requires an amount",
                    csv_record.account
                )
            })?;

            Ok(LedgerRecord::Transfer {
                from: csv_record.account,
                to,
                amount,
            })
        }
        other => Err(format!(
            "Invalid record type: '{}' for account {}",
            other, csv_record.account
        )),
    }
}

/// Write final account balances to CSV format
///
/// Writes balances with columns: account, balance.
/// Accounts are sorted by id for deterministic output.
///
/// # Arguments
///
/// * `accounts` - Slice of accounts to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_balances_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["account", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    // Sort accounts by id for deterministic output
    let mut sorted_accounts: Vec<&Account> = accounts.iter().collect();
    sorted_accounts.sort_by_key(|account| account.id());

    for account in sorted_accounts {
        writer
            .write_record(&[account.id().to_string(), account.balance().to_string()])
            .map_err(|e| format!("Failed to write balance record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
