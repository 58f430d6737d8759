use crate::{DomainRecord, ParseError};
use std::fmt;
use std::str::FromStr;

/// Sink for reformatted records.
///
/// Writers may buffer; `finish` must be called to flush buffered output.
pub trait RecordWriter {
    /// Returns the name of the output format (e.g., "tsv", "ndjson")
    fn name(&self) -> &'static str;

    fn write_record(&mut self, record: &DomainRecord) -> Result<(), ParseError>;

    /// Flush everything written so far to the underlying sink.
    fn finish(&mut self) -> Result<(), ParseError>;
}

/// Output formats understood by [`crate::writer_for`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Seven tab-separated columns, no header row.
    #[default]
    Tsv,
    /// One JSON object per line.
    Ndjson,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Ndjson => "ndjson",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tsv" | "tab" => Ok(OutputFormat::Tsv),
            "ndjson" | "jsonl" => Ok(OutputFormat::Ndjson),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}
