//! Search + category view over the catalog.
//!
//! Search is a case-insensitive substring match against the title (`act`) and the prompt
//! body only; contributor and type are not searched. The category is an exact tag match
//! with [`Category::All`] matching everything.

use crate::models::{Category, PromptRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptQuery {
    pub search: String,
    pub category: Category,
}

impl PromptQuery {
    pub fn new(search: impl Into<String>, category: Category) -> Self {
        Self { search: search.into(), category }
    }

    pub fn matches(&self, record: &PromptRecord) -> bool {
        matches_search(record, &self.search) && self.category.matches(&record.prompt_type)
    }
}

/// Empty term matches everything
pub fn matches_search(record: &PromptRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.act.to_lowercase().contains(&needle) || record.prompt.to_lowercase().contains(&needle)
}

/// Records matching both search and category, in catalog order
pub fn filter_prompts<'a>(
    records: &'a [PromptRecord],
    query: &PromptQuery,
) -> Vec<&'a PromptRecord> {
    records.iter().filter(|record| query.matches(record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PromptId, PromptType};

    fn record(id: usize, act: &str, prompt: &str, prompt_type: PromptType) -> PromptRecord {
        PromptRecord {
            id: PromptId(id),
            act: act.to_string(),
            prompt: prompt.to_string(),
            for_devs: false,
            prompt_type,
            contributor: "Coder".to_string(),
        }
    }

    fn sample() -> Vec<PromptRecord> {
        vec![
            record(0, "Linux Terminal", "Act as a linux terminal", PromptType::Text),
            record(1, "Painter", "Paint a Sunset over the sea", PromptType::Image),
            record(2, "SQL Terminal", "Reply with tables", PromptType::Structured),
            record(3, "Odd", "lowercase tag", PromptType::Other("text".to_string())),
        ]
    }

    #[test]
    fn test_empty_query_matches_all() {
        let records = sample();
        assert_eq!(filter_prompts(&records, &PromptQuery::default()).len(), 4);
    }

    #[test]
    fn test_search_case_insensitive_on_act() {
        let records = sample();
        let results = filter_prompts(&records, &PromptQuery::new("TERMINAL", Category::All));
        let acts: Vec<&str> = results.iter().map(|r| r.act.as_str()).collect();
        assert_eq!(acts, vec!["Linux Terminal", "SQL Terminal"]);
    }

    #[test]
    fn test_search_matches_prompt_body() {
        let records = sample();
        let results = filter_prompts(&records, &PromptQuery::new("sunset", Category::All));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, PromptId(1));
    }

    #[test]
    fn test_search_ignores_contributor() {
        let records = sample();
        assert!(filter_prompts(&records, &PromptQuery::new("coder", Category::All)).is_empty());
    }

    #[test]
    fn test_category_filter() {
        let records = sample();
        let results = filter_prompts(&records, &PromptQuery::new("", Category::Text));
        // The lowercase "text" tag is not the TEXT category
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, PromptId(0));
    }

    #[test]
    fn test_search_and_category_combined() {
        let records = sample();
        let results = filter_prompts(&records, &PromptQuery::new("terminal", Category::Structured));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].act, "SQL Terminal");
    }

    #[test]
    fn test_search_does_not_trim() {
        let records = sample();
        assert!(filter_prompts(&records, &PromptQuery::new(" painter", Category::All)).is_empty());
    }
}
