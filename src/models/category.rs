use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use super::prompt::PromptType;

/// Coarse category filter. `All` matches every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    All,
    Text,
    Image,
    Structured,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::All, Category::Text, Category::Image, Category::Structured];

    /// Tag compared against a record's type (`ALL` is the sentinel)
    pub fn as_str(self) -> &'static str {
        match self {
            Category::All => "ALL",
            Category::Text => "TEXT",
            Category::Image => "IMAGE",
            Category::Structured => "STRUCTURED",
        }
    }

    /// Human readable label for category bars
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All Prompts",
            Category::Text => "Text",
            Category::Image => "Image",
            Category::Structured => "Structured",
        }
    }

    /// Exact tag equality, so `Other("text")` never matches `Text`
    pub fn matches(self, prompt_type: &PromptType) -> bool {
        match self {
            Category::All => true,
            _ => prompt_type.as_str() == self.as_str(),
        }
    }

    /// Next category in bar order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Category::All => Category::Text,
            Category::Text => Category::Image,
            Category::Image => Category::Structured,
            Category::Structured => Category::All,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "ALL" => Ok(Category::All),
            "TEXT" => Ok(Category::Text),
            "IMAGE" => Ok(Category::Image),
            "STRUCTURED" => Ok(Category::Structured),
            _ => Err(anyhow!(
                "Unknown category: '{}' (valid categories: all, text, image, structured)",
                s
            )),
        }
    }
}
