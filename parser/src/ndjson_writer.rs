use crate::{base_writer::RecordWriter, DomainRecord, ParseError};
use std::io::{BufWriter, Write};

/// Newline-delimited JSON writer, one object per record.
pub struct NdjsonWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            inner: BufWriter::new(sink),
        }
    }
}

impl<W: Write> RecordWriter for NdjsonWriter<W> {
    fn name(&self) -> &'static str {
        "ndjson"
    }

    fn write_record(&mut self, record: &DomainRecord) -> Result<(), ParseError> {
        serde_json::to_writer(&mut self.inner, record)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.inner.flush()?;
        Ok(())
    }
}
