//! Transfer Engine CLI
//!
//! Command-line interface for processing ledger transfer batches from CSV
//! files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- batch.csv > balances.csv
//! cargo run -- --fee 5 batch.csv > balances.csv
//! cargo run -- --journal transfers.log batch.csv > balances.csv
//! ```
//!
//! The program reads ledger records from the input CSV file, applies them
//! through the transfer engine, and outputs the final account balances to
//! stdout. Confirmed transfers are appended to the journal as they happen —
//! to stdout by default, ahead of the balances CSV, or to a separate file
//! via `--journal`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use rust_transfer_engine::batch;
use rust_transfer_engine::cli;
use rust_transfer_engine::core::{TransferJournal, WriterJournal};
use std::fs::File;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Wire the journal sink: a file when requested, stdout otherwise
    let journal: Box<dyn TransferJournal> = match &args.journal {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(WriterJournal::new(file)),
            Err(e) => {
                eprintln!(
                    "Error: failed to create journal file '{}': {}",
                    path.display(),
                    e
                );
                process::exit(1);
            }
        },
        None => Box::new(WriterJournal::new(io::stdout())),
    };

    // Process the batch; final balances go to stdout
    let mut output = io::stdout();
    if let Err(e) = batch::process_file(&args.input_file, journal, &mut output, args.fee) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
