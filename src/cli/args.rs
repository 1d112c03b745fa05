use clap::Parser;
use std::path::PathBuf;

/// Process ledger transfer batches from CSV
#[derive(Parser, Debug)]
#[command(name = "transfer-engine")]
#[command(about = "Process ledger transfer batches from CSV", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing ledger records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Flat fee charged to the source account on every transfer
    #[arg(
        long = "fee",
        value_name = "FEE",
        default_value_t = 1,
        help = "Flat fee charged to the source account on every transfer"
    )]
    pub fee: u32,

    /// Where to write the transfer journal
    #[arg(
        long = "journal",
        value_name = "PATH",
        help = "Write the transfer journal to this file instead of stdout"
    )]
    pub journal: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_fee(&["program", "input.csv"], 1)]
    #[case::explicit_fee(&["program", "--fee", "5", "input.csv"], 5)]
    #[case::zero_fee(&["program", "--fee", "0", "input.csv"], 0)]
    fn test_fee_parsing(#[case] args: &[&str], #[case] expected: u32) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.fee, expected);
    }

    #[rstest]
    #[case::no_journal(&["program", "input.csv"], None)]
    #[case::journal_path(
        &["program", "--journal", "transfers.log", "input.csv"],
        Some("transfers.log")
    )]
    fn test_journal_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.journal, expected.map(PathBuf::from));
    }

    #[test]
    fn test_input_file_is_positional() {
        let parsed = CliArgs::try_parse_from(["program", "batch.csv"]).unwrap();
        assert_eq!(parsed.input_file, PathBuf::from("batch.csv"));
    }

    // Error handling tests
    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::negative_fee(&["program", "--fee", "-3", "input.csv"])]
    #[case::non_numeric_fee(&["program", "--fee", "abc", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
