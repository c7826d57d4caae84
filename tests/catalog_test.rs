//! Tests against the bundled catalog and file-backed catalogs
mod common;

use std::collections::HashSet;

use common::{CatalogFile, sample_rows};
use prompt_catalog::catalog::CatalogSource;
use prompt_catalog::filters::{PromptQuery, parse_filter};
use prompt_catalog::{Catalog, Category, PromptId, PromptType};

#[test]
fn test_bundled_catalog_loads_cleanly() {
    let catalog = Catalog::embedded();
    let summary = catalog.summary();

    assert_eq!(catalog.len(), 21);
    assert_eq!(summary.data_rows, 21);
    assert_eq!(summary.dropped, 0);
    assert!(!summary.unterminated_quote);
}

#[test]
fn test_bundled_ids_are_unique_and_dense() {
    let catalog = Catalog::embedded();
    let ids: HashSet<PromptId> = catalog.records().iter().map(|r| r.id).collect();

    assert_eq!(ids.len(), catalog.len());
    for (position, record) in catalog.records().iter().enumerate() {
        assert_eq!(record.id, PromptId(position));
    }
}

#[test]
fn test_bundled_records_are_complete() {
    for record in Catalog::embedded().records() {
        assert!(!record.act.is_empty());
        assert!(!record.prompt.is_empty());
        assert!(!record.contributor.is_empty());
        assert!(!matches!(record.prompt_type, PromptType::Other(_)), "{}", record.id);
    }
}

#[test]
fn test_bundled_stats() {
    let stats = Catalog::embedded().stats();

    assert_eq!(stats.total, 21);
    assert_eq!(stats.dev_focused, 10);
    assert_eq!(stats.contributors, 12);
    assert_eq!(stats.by_type.get("TEXT"), Some(&13));
    assert_eq!(stats.by_type.get("IMAGE"), Some(&4));
    assert_eq!(stats.by_type.get("STRUCTURED"), Some(&4));
}

#[test]
fn test_bundled_multiline_and_quoted_prompts() {
    let catalog = Catalog::embedded();

    let storyteller = catalog.get(PromptId(7)).unwrap();
    assert_eq!(storyteller.act, "Storyteller");
    assert!(storyteller.prompt.contains('\n'));
    assert!(storyteller.prompt.ends_with("\"I need an interesting story on perseverance.\""));

    let sql = catalog.get(PromptId(9)).unwrap();
    assert!(sql.prompt.contains("\"Products\", \"Users\""));
}

#[test]
fn test_bundled_lookup() {
    let catalog = Catalog::embedded();
    assert_eq!(catalog.get(PromptId(8)).unwrap().act, "Regex Generator");
    assert_eq!(catalog.get(PromptId(0)).unwrap().act, "Linux Terminal");
    assert!(catalog.get(PromptId(21)).is_none());
}

#[test]
fn test_bundled_search() {
    let catalog = Catalog::embedded();
    let acts: Vec<&str> = catalog
        .query(&PromptQuery::new("Terminal", Category::All))
        .iter()
        .map(|r| r.act.as_str())
        .collect();

    // JavaScript Console mentions a terminal in its prompt body
    assert_eq!(acts, vec!["Linux Terminal", "JavaScript Console", "SQL Terminal"]);
}

#[test]
fn test_bundled_category_counts() {
    let catalog = Catalog::embedded();
    let count = |category| catalog.query(&PromptQuery::new("", category)).len();

    assert_eq!(count(Category::All), 21);
    assert_eq!(count(Category::Text), 13);
    assert_eq!(count(Category::Image), 4);
    assert_eq!(count(Category::Structured), 4);
}

#[test]
fn test_bundled_filter_and_query() {
    let catalog = Catalog::embedded();
    let filter = parse_filter("dev:true").unwrap();
    let matched = catalog.query_with_filter(&PromptQuery::new("", Category::Image), &filter);

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].act, "Isometric Game Asset");
}

#[test]
fn test_file_catalog() {
    let file = CatalogFile::with_rows(&sample_rows());
    let catalog = Catalog::from_path(file.path()).unwrap();

    assert_eq!(catalog.source(), &CatalogSource::File(file.path().to_path_buf()));
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.summary().dropped, 1);
    assert!(catalog.get(PromptId(2)).is_none());
    assert_eq!(catalog.get(PromptId(3)).unwrap().contributor, "Anonymous");
}

#[test]
fn test_open_prefers_file() {
    let file = CatalogFile::with_rows(&sample_rows());

    assert_eq!(Catalog::open(Some(file.path())).unwrap().len(), 4);
    assert_eq!(Catalog::open(None).unwrap().len(), 21);
}

#[test]
fn test_missing_file_error() {
    let file = CatalogFile::with_rows(&sample_rows());
    let missing = file.dir().join("absent.csv");

    let err = Catalog::from_path(&missing).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to open catalog file"));
}
