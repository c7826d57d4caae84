//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const HEADER: &str = "act,prompt,for_devs,type,contributor";

/// Quote a field the way catalog files do: only when it holds a comma, quote or newline
pub fn quote_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Builder for one catalog data row
#[derive(Clone)]
pub struct PromptRowBuilder {
    act: String,
    prompt: String,
    for_devs: String,
    prompt_type: String,
    contributor: String,
}

impl PromptRowBuilder {
    /// Create a text prompt row with default values
    pub fn new(act: &str) -> Self {
        Self {
            act: act.to_string(),
            prompt: format!("I want you to act as a {}", act.to_lowercase()),
            for_devs: "FALSE".to_string(),
            prompt_type: "TEXT".to_string(),
            contributor: "tester".to_string(),
        }
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.prompt = prompt.to_string();
        self
    }

    pub fn for_devs(mut self) -> Self {
        self.for_devs = "TRUE".to_string();
        self
    }

    pub fn prompt_type(mut self, prompt_type: &str) -> Self {
        self.prompt_type = prompt_type.to_string();
        self
    }

    pub fn contributor(mut self, contributor: &str) -> Self {
        self.contributor = contributor.to_string();
        self
    }

    pub fn to_csv_line(&self) -> String {
        [&self.act, &self.prompt, &self.for_devs, &self.prompt_type, &self.contributor]
            .iter()
            .map(|field| quote_field(field))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Catalog text with a header row and one line per builder
pub fn catalog_text(rows: &[PromptRowBuilder]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for row in rows {
        text.push_str(&row.to_csv_line());
        text.push('\n');
    }
    text
}

/// Temporary catalog file on disk
pub struct CatalogFile {
    temp_dir: TempDir,
    path: PathBuf,
}

impl CatalogFile {
    /// Write raw text to `prompts.csv` in a fresh temp dir
    pub fn with_text(text: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("prompts.csv");
        fs::write(&path, text).expect("Failed to write prompts.csv");
        Self { temp_dir, path }
    }

    /// Write a header plus the given rows
    pub fn with_rows(rows: &[PromptRowBuilder]) -> Self {
        Self::with_text(&catalog_text(rows))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Small catalog covering every category, a dev prompt and an empty-prompt row
pub fn sample_rows() -> Vec<PromptRowBuilder> {
    vec![
        PromptRowBuilder::new("Linux Terminal").for_devs().contributor("f"),
        PromptRowBuilder::new("Storyteller")
            .prompt("Tell stories.\nMy first request is \"a dragon, please\"")
            .contributor("devisasari"),
        PromptRowBuilder::new("Broken").prompt(""),
        PromptRowBuilder::new("Watercolor Portrait")
            .prompt("Loose watercolor portrait, soft light")
            .prompt_type("IMAGE")
            .contributor(""),
        PromptRowBuilder::new("SQL Terminal").for_devs().prompt_type("STRUCTURED").contributor("f"),
    ]
}
