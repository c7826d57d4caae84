use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
use super::parser::parse_dev_flag;
use crate::models::PromptRecord;

/// Records matching `filter`, in their original order. An empty expression matches all.
pub fn apply_filters<'a>(
    records: &'a [PromptRecord],
    filter: &FilterExpr,
) -> Vec<&'a PromptRecord> {
    records.iter().filter(|record| evaluate_filter(record, filter)).collect()
}

/// Left-to-right evaluation, no precedence
pub fn evaluate_filter(record: &PromptRecord, filter: &FilterExpr) -> bool {
    let Some(first) = filter.filters.first() else {
        return true;
    };

    let mut result = evaluate_field_filter(record, first);
    for (operator, next) in filter.operators.iter().zip(filter.filters.iter().skip(1)) {
        let next_result = evaluate_field_filter(record, next);
        result = match operator {
            FilterOperator::And => result && next_result,
            FilterOperator::Or => result || next_result,
        };
    }

    result
}

fn evaluate_field_filter(record: &PromptRecord, filter: &FieldFilter) -> bool {
    match filter.field {
        FilterField::Type => match_type(record, &filter.value),
        FilterField::Contributor => match_contributor(record, &filter.value),
        FilterField::Dev => match_dev(record, &filter.value),
    }
}

/// Case-insensitive equality with the type tag
fn match_type(record: &PromptRecord, value: &str) -> bool {
    record.prompt_type.as_str().to_lowercase() == value.to_lowercase()
}

/// Case-insensitive substring of the contributor
fn match_contributor(record: &PromptRecord, value: &str) -> bool {
    record.contributor.to_lowercase().contains(&value.to_lowercase())
}

fn match_dev(record: &PromptRecord, value: &str) -> bool {
    parse_dev_flag(value).is_some_and(|flag| record.for_devs == flag)
}
