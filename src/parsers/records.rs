use super::csv::{Document, Row, parse_document};
use crate::models::{PromptId, PromptRecord, PromptType};

const COL_ACT: usize = 0;
const COL_PROMPT: usize = 1;
const COL_FOR_DEVS: usize = 2;
const COL_TYPE: usize = 3;
const COL_CONTRIBUTOR: usize = 4;

const DEFAULT_ACT: &str = "Unknown";
const DEFAULT_CONTRIBUTOR: &str = "Anonymous";

/// Field at `index`, or the empty string for short rows
pub fn field_or_default(row: &Row, index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Project one data row onto the fixed five-column record shape
fn project_row(position: usize, row: &Row) -> PromptRecord {
    PromptRecord {
        id: PromptId(position),
        act: non_empty_or(field_or_default(row, COL_ACT), DEFAULT_ACT).to_string(),
        prompt: field_or_default(row, COL_PROMPT).to_string(),
        for_devs: field_or_default(row, COL_FOR_DEVS).to_uppercase() == "TRUE",
        prompt_type: PromptType::from_raw(field_or_default(row, COL_TYPE)),
        contributor: non_empty_or(field_or_default(row, COL_CONTRIBUTOR), DEFAULT_CONTRIBUTOR)
            .to_string(),
    }
}

/// Turn parsed rows into records.
///
/// The first row is a header and is always skipped. Ids come from each row's position
/// among the data rows *before* rows with an empty prompt are dropped, so the surviving
/// ids may have gaps.
pub fn normalize(doc: Document) -> Vec<PromptRecord> {
    doc.iter()
        .skip(1)
        .enumerate()
        .map(|(position, row)| project_row(position, row))
        .filter(|record| !record.prompt.is_empty())
        .collect()
}

/// Parse and normalize a catalog CSV text in one call
pub fn load_prompts(text: &str) -> Vec<PromptRecord> {
    normalize(parse_document(text))
}
