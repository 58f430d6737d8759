use crate::{
    DomainRecord, MalformedPolicy, ParseError, ParseStats, PfamHit, MIN_COLUMNS,
    MIN_GENE_ID_SEGMENTS,
};
use std::io::BufRead;
use tracing::{debug, warn};

/// Result of classifying one raw line of a pfam_scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Comment, header or blank line. Never transformed.
    Header,
    /// Data row with its line terminator removed.
    Data(&'a str),
}

/// Classify a raw line as read from the input, terminator included.
///
/// A line is a header when it starts with `#` (ignoring leading whitespace) or
/// when its length, counting the terminator, is at most one. `"\r\n"` counts
/// as a single terminator character.
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let (line, terminated) = match raw.strip_suffix('\n') {
        Some(rest) => (rest.strip_suffix('\r').unwrap_or(rest), true),
        None => (raw, false),
    };

    let length = line.chars().take(2).count() + usize::from(terminated);
    if length <= 1 || line.trim_start().starts_with('#') {
        LineKind::Header
    } else {
        LineKind::Data(line)
    }
}

/// Unicode whitespace plus the ASCII file, group, record and unit separators.
fn is_column_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Extract the used columns of a data row.
pub fn parse_hit(line: &str, line_number: usize) -> Result<PfamHit<'_>, ParseError> {
    let columns: Vec<&str> = line
        .split(is_column_separator)
        .filter(|column| !column.is_empty())
        .collect();
    if columns.len() < MIN_COLUMNS {
        return Err(ParseError::TooFewColumns {
            line: line_number,
            found: columns.len(),
            content: line.to_string(),
        });
    }

    let gene_id = columns[0];
    let segments: Vec<&str> = gene_id.split('|').collect();
    if segments.len() < MIN_GENE_ID_SEGMENTS {
        return Err(ParseError::MalformedGeneId {
            line: line_number,
            gene_id: gene_id.to_string(),
            found: segments.len(),
        });
    }

    Ok(PfamHit {
        parent: segments[0],
        feature: segments[2],
        envelope_start: columns[3],
        envelope_end: columns[4],
        hmm_name: columns[6],
    })
}

/// Transform one raw line. Header lines yield `Ok(None)`.
pub fn parse_line(raw: &str, line_number: usize) -> Result<Option<DomainRecord>, ParseError> {
    match classify_line(raw) {
        LineKind::Header => Ok(None),
        LineKind::Data(line) => {
            let hit = parse_hit(line, line_number)?;
            Ok(Some(DomainRecord::from_hit(&hit)))
        }
    }
}

/// Lazily reads a pfam_scan report and yields one record per data row, in
/// input order.
///
/// Iteration ends after the first error that is not skipped by the policy.
pub struct PfamscanReader<R> {
    reader: R,
    policy: MalformedPolicy,
    buffer: String,
    line_number: usize,
    stats: ParseStats,
    done: bool,
}

impl<R: BufRead> PfamscanReader<R> {
    pub fn new(reader: R, policy: MalformedPolicy) -> Self {
        debug!("Reading pfam_scan report with malformed-row policy {:?}", policy);
        Self {
            reader,
            policy,
            buffer: String::new(),
            line_number: 0,
            stats: ParseStats::default(),
            done: false,
        }
    }

    /// Counters for the lines consumed so far.
    pub fn stats(&self) -> ParseStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for PfamscanReader<R> {
    type Item = Result<DomainRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            }

            self.line_number += 1;
            self.stats.lines += 1;

            match parse_line(&self.buffer, self.line_number) {
                Ok(Some(record)) => {
                    self.stats.records += 1;
                    return Some(Ok(record));
                }
                Ok(None) => self.stats.headers += 1,
                Err(e) if e.is_malformed_row() && self.policy == MalformedPolicy::Skip => {
                    self.stats.malformed += 1;
                    warn!("Skipping malformed row: {}", e);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
