use serde::{Deserialize, Serialize};

/// Prefix prepended to the HMM name in the `domain` column.
pub const DOMAIN_PREFIX: &str = "pfam_";

/// Placeholder written to the `description` column.
pub const MISSING_VALUE: &str = "NA";

/// Placeholder written to the `flag` column.
pub const DEFAULT_FLAG: &str = "N";

/// Minimum number of whitespace-separated columns in a data row.
pub const MIN_COLUMNS: usize = 7;

/// Minimum number of `|`-separated segments in a gene ID.
pub const MIN_GENE_ID_SEGMENTS: usize = 3;

/// The columns of one pfam_scan data row that the reformatter uses.
///
/// Borrows from the line it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PfamHit<'a> {
    /// Gene ID segment 0 (parent record).
    pub parent: &'a str,
    /// Gene ID segment 2 (sub-feature).
    pub feature: &'a str,
    pub envelope_start: &'a str,
    pub envelope_end: &'a str,
    pub hmm_name: &'a str,
}

/// Reformatted output record, serialized in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub feature_id: String,
    pub gene: String,
    pub domain: String,
    pub start: String,
    pub end: String,
    pub description: String,
    pub flag: String,
}

impl DomainRecord {
    pub fn from_hit(hit: &PfamHit<'_>) -> Self {
        DomainRecord {
            feature_id: format!("{}#{}", hit.parent, hit.feature),
            gene: hit.feature.to_string(),
            domain: format!("{}{}", DOMAIN_PREFIX, hit.hmm_name),
            start: hit.envelope_start.to_string(),
            end: hit.envelope_end.to_string(),
            description: MISSING_VALUE.to_string(),
            flag: DEFAULT_FLAG.to_string(),
        }
    }
}

/// How rows that do not have the expected shape are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop at the first malformed row and return its error.
    #[default]
    Fail,
    /// Log a warning, count the row and continue.
    Skip,
}

/// Counters collected while reading a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub headers: usize,
    pub records: usize,
    pub malformed: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: expected at least {} columns, found {found}: {content:?}", MIN_COLUMNS)]
    TooFewColumns {
        line: usize,
        found: usize,
        content: String,
    },
    #[error("line {line}: gene ID {gene_id:?} has {found} '|'-separated segments, expected at least {}", MIN_GENE_ID_SEGMENTS)]
    MalformedGeneId {
        line: usize,
        gene_id: String,
        found: usize,
    },
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

impl ParseError {
    /// True for errors caused by the shape of a single row, as opposed to I/O.
    pub fn is_malformed_row(&self) -> bool {
        matches!(
            self,
            ParseError::TooFewColumns { .. } | ParseError::MalformedGeneId { .. }
        )
    }
}
