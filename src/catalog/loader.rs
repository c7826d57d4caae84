//! Catalog loading with load-quality reporting.
//!
//! The parse/normalize pipeline itself never fails. This layer adds what a CLI needs
//! around it: reading the source, counting what was kept and dropped, and logging it.

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::models::PromptRecord;
use crate::parsers::{normalize, scan_document};
use crate::utils::read_source_file;

/// Outcome of one load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Rows after the header
    pub data_rows: usize,
    /// Records kept
    pub records: usize,
    /// Data rows dropped for an empty prompt
    pub dropped: usize,
    /// Input ended inside a quoted field
    pub unterminated_quote: bool,
}

/// Parse and normalize `text`, logging a summary
pub fn load_from_text(text: &str) -> (Vec<PromptRecord>, LoadSummary) {
    let scan = scan_document(text);
    let data_rows = scan.document.len().saturating_sub(1);

    if scan.unterminated_quote {
        warn!("Catalog ends inside a quoted field; the last field absorbed the rest of the input");
    }

    let records = normalize(scan.document);
    let dropped = data_rows - records.len();

    if dropped > 0 {
        debug!(dropped, "Dropped catalog rows with an empty prompt");
    }
    info!(data_rows, records = records.len(), "Loaded prompt catalog");

    let summary = LoadSummary {
        data_rows,
        records: records.len(),
        dropped,
        unterminated_quote: scan.unterminated_quote,
    };
    (records, summary)
}

/// Read a catalog file (size-capped) and load it
pub fn load_from_path(path: &Path) -> Result<(Vec<PromptRecord>, LoadSummary)> {
    let text = read_source_file(path)?;
    debug!(path = %path.display(), bytes = text.len(), "Read catalog file");
    Ok(load_from_text(&text))
}
