use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::prompt::PromptRecord;

/// Summary counts over a set of records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptStats {
    pub total: usize,
    pub dev_focused: usize,
    pub contributors: usize,
    /// Record count per type tag, sorted by tag
    pub by_type: BTreeMap<String, usize>,
}

impl PromptStats {
    pub fn from_records(records: &[PromptRecord]) -> Self {
        let mut contributors = HashSet::new();
        let mut by_type = BTreeMap::new();
        let mut dev_focused = 0;

        for record in records {
            if record.for_devs {
                dev_focused += 1;
            }
            contributors.insert(record.contributor.as_str());
            *by_type.entry(record.prompt_type.as_str().to_string()).or_insert(0) += 1;
        }

        Self { total: records.len(), dev_focused, contributors: contributors.len(), by_type }
    }
}
