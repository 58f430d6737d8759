use crate::writers::writer_for;
use crate::{MalformedPolicy, OutputFormat, ParseError, ParseStats, PfamscanReader};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Settings for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub policy: MalformedPolicy,
    pub format: OutputFormat,
}

/// Stream every data row of `reader` into `sink` as it is parsed.
///
/// On a fatal row error the records already written are flushed before the
/// error is returned.
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    sink: W,
    options: &ConvertOptions,
) -> Result<ParseStats, ParseError> {
    debug!("Starting conversion with {:?}", options);
    let mut records = PfamscanReader::new(reader, options.policy);
    let mut writer = writer_for(options.format, sink);

    for result in records.by_ref() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Conversion stopped: {}", e);
                if let Err(flush_err) = writer.finish() {
                    warn!("Failed to flush partial output: {}", flush_err);
                }
                return Err(e);
            }
        };
        writer.write_record(&record)?;
    }
    writer.finish()?;

    let stats = records.stats();
    info!(
        "Converted {} lines: {} records, {} headers, {} malformed rows skipped",
        stats.lines, stats.records, stats.headers, stats.malformed
    );
    Ok(stats)
}

/// Open the report at `path` and [`convert`] it. The file is closed on return.
pub fn convert_path<W: Write>(
    path: &Path,
    sink: W,
    options: &ConvertOptions,
) -> Result<ParseStats, ParseError> {
    info!("Reading pfam_scan report {}", path.display());
    let file = File::open(path)?;
    convert(BufReader::new(file), sink, options)
}
