use serde::Serialize;
use std::path::PathBuf;

/// The single fixed diagnostic message, mirrored in every output format
pub const NON_ENGLISH_MESSAGE: &str = "Avoid using non-English words in identifiers";

// One flagged identifier occurrence. Every occurrence reports, so the same
// name twice in a file yields two findings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    pub file: PathBuf,
    /// 1-based line of the identifier node
    pub line: usize,
    /// 1-based column of the identifier node
    pub column: usize,
    pub name: String,
}

// Counters for the end-of-run summary block
#[derive(Debug, Clone, Serialize, Default)]
pub struct CheckSummary {
    pub files_scanned: usize,
    pub identifiers_checked: usize,
    pub findings: usize,
    /// Distinct word tokens memoized during the run
    pub cached_tokens: usize,
    /// Dictionary store round-trips (cache misses)
    pub store_lookups: u64,
    pub elapsed_ms: u128,
}

// Everything a check run produces
#[derive(Debug, Serialize)]
pub struct CheckResults {
    pub findings: Vec<Finding>,
    pub summary: CheckSummary,
    /// Dictionary path that actually loaded, for diagnostics
    pub dictionary: PathBuf,
}
