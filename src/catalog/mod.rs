//! The loaded prompt catalog.
//!
//! A [`Catalog`] is built once at startup from one source (the bundled CSV or a file given
//! on the command line) and is read-only afterwards. Search, category and filter views are
//! derived from it without touching the records.

pub mod loader;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::filters::{FilterExpr, PromptQuery, apply_filters, filter_prompts};
use crate::models::{PromptId, PromptRecord, PromptStats};
pub use loader::{LoadSummary, load_from_path, load_from_text};

/// Catalog text bundled into the binary
pub const EMBEDDED_CSV: &str = include_str!("../../data/prompts.csv");

/// Where the catalog text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Embedded,
    File(PathBuf),
    Inline,
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Embedded => "bundled catalog".to_string(),
            CatalogSource::File(path) => path.display().to_string(),
            CatalogSource::Inline => "in-memory text".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    source: CatalogSource,
    records: Vec<PromptRecord>,
    summary: LoadSummary,
}

impl Catalog {
    /// Load the bundled catalog
    pub fn embedded() -> Self {
        let (records, summary) = load_from_text(EMBEDDED_CSV);
        Self { source: CatalogSource::Embedded, records, summary }
    }

    /// Load from in-memory CSV text
    pub fn from_csv(text: &str) -> Self {
        let (records, summary) = load_from_text(text);
        Self { source: CatalogSource::Inline, records, summary }
    }

    /// Load from a CSV file, rejecting files over [`crate::utils::MAX_SOURCE_SIZE_BYTES`]
    pub fn from_path(path: &Path) -> Result<Self> {
        let (records, summary) = load_from_path(path)?;
        Ok(Self { source: CatalogSource::File(path.to_path_buf()), records, summary })
    }

    /// Load from `path` when given, otherwise the bundled catalog
    pub fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::embedded()),
        }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<PromptRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id. Ids are sorted, so this is a binary search.
    pub fn get(&self, id: PromptId) -> Option<&PromptRecord> {
        let idx = self.records.binary_search_by_key(&id, |record| record.id).ok()?;
        self.records.get(idx)
    }

    pub fn stats(&self) -> PromptStats {
        PromptStats::from_records(&self.records)
    }

    /// Records matching a search + category query, in catalog order
    pub fn query(&self, query: &PromptQuery) -> Vec<&PromptRecord> {
        filter_prompts(&self.records, query)
    }

    /// Records matching a query and a filter expression, in catalog order
    pub fn query_with_filter(
        &self,
        query: &PromptQuery,
        filter: &FilterExpr,
    ) -> Vec<&PromptRecord> {
        let matched = apply_filters(&self.records, filter);
        matched.into_iter().filter(|record| query.matches(record)).collect()
    }
}
