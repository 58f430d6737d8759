//! Output format registry.
//!
//! To add a format, implement [`RecordWriter`], add a variant to
//! [`OutputFormat`] and map it in [`writer_for`].

use crate::base_writer::{OutputFormat, RecordWriter};
use crate::{NdjsonWriter, TsvWriter};
use std::io::Write;
use tracing::debug;

/// Build the writer for `format` on top of `sink`.
pub fn writer_for<'a, W: Write + 'a>(format: OutputFormat, sink: W) -> Box<dyn RecordWriter + 'a> {
    let writer: Box<dyn RecordWriter + 'a> = match format {
        OutputFormat::Tsv => Box::new(TsvWriter::new(sink)),
        OutputFormat::Ndjson => Box::new(NdjsonWriter::new(sink)),
    };
    debug!("Selected {} writer", writer.name());
    writer
}
