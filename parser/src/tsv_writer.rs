use crate::{base_writer::RecordWriter, DomainRecord, ParseError};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::Write;

/// Tab-separated writer. Fields are written verbatim, without quoting.
pub struct TsvWriter<W: Write> {
    inner: Writer<W>,
}

impl<W: Write> TsvWriter<W> {
    pub fn new(sink: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);
        Self { inner }
    }
}

impl<W: Write> RecordWriter for TsvWriter<W> {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn write_record(&mut self, record: &DomainRecord) -> Result<(), ParseError> {
        self.inner.serialize(record)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ParseError> {
        self.inner.flush()?;
        Ok(())
    }
}
