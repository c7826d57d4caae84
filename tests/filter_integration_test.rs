//! Integration tests for filter functionality
mod common;

use common::{PromptRowBuilder, catalog_text};
use prompt_catalog::PromptRecord;
use prompt_catalog::filters::apply::apply_filters;
use prompt_catalog::filters::parser::parse_filter;
use prompt_catalog::filters::query::{PromptQuery, filter_prompts};
use prompt_catalog::load_prompts;
use prompt_catalog::models::Category;

fn create_test_records() -> Vec<PromptRecord> {
    load_prompts(&catalog_text(&[
        PromptRowBuilder::new("Linux Terminal").for_devs().contributor("f"),
        PromptRowBuilder::new("Painter").prompt_type("IMAGE").contributor("Jane Doe"),
        PromptRowBuilder::new("SQL Terminal").for_devs().prompt_type("STRUCTURED").contributor("f"),
        PromptRowBuilder::new("Poet").contributor("Jane Smith"),
        PromptRowBuilder::new("Lowercase Tag").prompt_type("image").contributor(""),
    ]))
}

fn acts<'a>(records: &[&'a PromptRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.act.as_str()).collect()
}

#[test]
fn test_filter_integration_type() {
    let records = create_test_records();
    let filter = parse_filter("type:image").expect("Parse filter");
    let filtered = apply_filters(&records, &filter);

    // The filter is case-insensitive, unlike the category
    assert_eq!(acts(&filtered), vec!["Painter", "Lowercase Tag"]);
}

#[test]
fn test_filter_integration_contributor_quoted() {
    let records = create_test_records();
    let filter = parse_filter("contributor:\"jane doe\"").expect("Parse filter");
    assert_eq!(acts(&apply_filters(&records, &filter)), vec!["Painter"]);
}

#[test]
fn test_filter_integration_by_alias_substring() {
    let records = create_test_records();
    let filter = parse_filter("by:jane").expect("Parse filter");
    assert_eq!(acts(&apply_filters(&records, &filter)), vec!["Painter", "Poet"]);
}

#[test]
fn test_filter_integration_dev() {
    let records = create_test_records();
    let filter = parse_filter("dev:yes").expect("Parse filter");
    assert_eq!(acts(&apply_filters(&records, &filter)), vec!["Linux Terminal", "SQL Terminal"]);

    let filter = parse_filter("dev:no").expect("Parse filter");
    assert_eq!(apply_filters(&records, &filter).len(), 3);
}

#[test]
fn test_filter_integration_implicit_and() {
    let records = create_test_records();
    let filter = parse_filter("type:structured dev:true").expect("Parse filter");
    assert_eq!(acts(&apply_filters(&records, &filter)), vec!["SQL Terminal"]);
}

#[test]
fn test_filter_integration_same_field_or() {
    let records = create_test_records();
    let filter = parse_filter("type:structured type:text").expect("Parse filter");
    assert_eq!(
        acts(&apply_filters(&records, &filter)),
        vec!["Linux Terminal", "SQL Terminal", "Poet"]
    );
}

#[test]
fn test_filter_integration_explicit_or() {
    let records = create_test_records();
    let filter = parse_filter("contributor:anonymous OR type:image").expect("Parse filter");
    assert_eq!(acts(&apply_filters(&records, &filter)), vec!["Painter", "Lowercase Tag"]);
}

#[test]
fn test_filter_integration_left_to_right() {
    let records = create_test_records();
    // (dev:true OR type:image) AND contributor:f
    let filter = parse_filter("dev:true OR type:image AND contributor:f").expect("Parse filter");
    assert_eq!(acts(&apply_filters(&records, &filter)), vec!["Linux Terminal", "SQL Terminal"]);
}

#[test]
fn test_filter_integration_empty_matches_all() {
    let records = create_test_records();
    let filter = parse_filter("").expect("Parse filter");
    assert_eq!(apply_filters(&records, &filter).len(), records.len());
}

#[test]
fn test_filter_integration_errors() {
    assert!(parse_filter("project:x").is_err());
    assert!(parse_filter("dev:sometimes").is_err());
    assert!(parse_filter("type:image OR").is_err());
    assert!(parse_filter("OR type:image").is_err());
    assert!(parse_filter("contributor:\"open").is_err());
}

#[test]
fn test_category_is_case_sensitive() {
    let records = create_test_records();
    let image = filter_prompts(&records, &PromptQuery::new("", Category::Image));
    assert_eq!(acts(&image), vec!["Painter"]);
}

#[test]
fn test_search_covers_act_and_prompt_only() {
    let records = create_test_records();

    let by_act = filter_prompts(&records, &PromptQuery::new("sql", Category::All));
    assert_eq!(acts(&by_act), vec!["SQL Terminal"]);

    let by_prompt = filter_prompts(&records, &PromptQuery::new("ACT AS A POET", Category::All));
    assert_eq!(acts(&by_prompt), vec!["Poet"]);

    let by_contributor = filter_prompts(&records, &PromptQuery::new("jane", Category::All));
    assert!(by_contributor.is_empty());
}

#[test]
fn test_search_and_category_combine() {
    let records = create_test_records();
    let matched = filter_prompts(&records, &PromptQuery::new("terminal", Category::Structured));
    assert_eq!(acts(&matched), vec!["SQL Terminal"]);
}
