//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output
//!   serialization)
//! - `sync_reader` - streaming CSV reader with iterator interface

pub mod csv_format;
pub mod sync_reader;

pub use csv_format::{convert_csv_record, write_balances_csv, CsvRecord};
pub use sync_reader::SyncReader;
