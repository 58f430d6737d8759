//! Command-line arguments for `pfamscan-reformat`.

use clap::{ArgAction, Parser};
use parser::{ConvertOptions, MalformedPolicy, OutputFormat};
use std::path::PathBuf;
use std::str::FromStr;

/// Reformat pfam_scan output into seven-column domain records
#[derive(Debug, Parser)]
#[command(name = "pfamscan-reformat")]
#[command(about = "Reformat pfam_scan output into seven-column domain records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// pfam_scan output file to reformat
    #[arg(short = 'i', long = "inFile", visible_alias = "in-file", value_name = "FILE")]
    pub in_file: PathBuf,

    /// Skip rows with too few columns or a short gene ID instead of stopping
    #[arg(long)]
    pub skip_malformed: bool,

    /// Output format: tsv (or tab), ndjson (or jsonl)
    #[arg(short, long, default_value_t = OutputFormat::Tsv, value_parser = OutputFormat::from_str)]
    pub format: OutputFormat,

    /// Log more to stderr (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            policy: if self.skip_malformed {
                MalformedPolicy::Skip
            } else {
                MalformedPolicy::Fail
            },
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_and_long_input_flag() {
        let cli = Cli::try_parse_from(["pfamscan-reformat", "-i", "hits.txt"]).unwrap();
        assert_eq!(cli.in_file, PathBuf::from("hits.txt"));
        assert_eq!(cli.convert_options(), ConvertOptions::default());

        let cli = Cli::try_parse_from(["pfamscan-reformat", "--inFile", "hits.txt"]).unwrap();
        assert_eq!(cli.in_file, PathBuf::from("hits.txt"));
    }

    #[test]
    fn test_options_mapping() {
        let cli = Cli::try_parse_from([
            "pfamscan-reformat",
            "-i",
            "hits.txt",
            "--skip-malformed",
            "--format",
            "ndjson",
            "-vv",
        ])
        .unwrap();

        let options = cli.convert_options();
        assert_eq!(options.policy, MalformedPolicy::Skip);
        assert_eq!(options.format, OutputFormat::Ndjson);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_format_aliases() {
        let cli = Cli::try_parse_from(["pfamscan-reformat", "-i", "hits.txt", "-f", "jsonl"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Ndjson);

        let err = Cli::try_parse_from(["pfamscan-reformat", "-i", "hits.txt", "-f", "xml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Unknown output format: xml"));
    }

    #[test]
    fn test_missing_input_is_error() {
        let err = Cli::try_parse_from(["pfamscan-reformat", "--skip-malformed"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
