// Parser crate for pfam_scan annotation reports
// Reads report rows and rewrites them as seven-column domain records

pub mod types;
pub mod pfamscan_parser;
pub mod convert;

// Output writers
pub mod base_writer;
pub mod writers;
pub mod tsv_writer;
pub mod ndjson_writer;

// Re-export main types
pub use types::*;
pub use pfamscan_parser::{classify_line, parse_hit, parse_line, LineKind, PfamscanReader};
pub use convert::{convert, convert_path, ConvertOptions};
pub use base_writer::{OutputFormat, RecordWriter};
pub use writers::writer_for;

// Re-export writers
pub use tsv_writer::TsvWriter;
pub use ndjson_writer::NdjsonWriter;
