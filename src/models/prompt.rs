use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "prompt-";

/// Position of a record's source row among the data rows, assigned before empty prompts
/// are dropped. Ids of retained records may therefore have gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PromptId(pub usize);

impl PromptId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.0)
    }
}

/// Accepts both `prompt-3` and a bare `3`
impl FromStr for PromptId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(ID_PREFIX).unwrap_or(trimmed);
        digits
            .parse::<usize>()
            .map(PromptId)
            .map_err(|_| anyhow!("Invalid prompt id: '{}' (expected prompt-<n> or <n>)", s))
    }
}

impl From<PromptId> for String {
    fn from(id: PromptId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for PromptId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Category tag of a prompt. Unrecognised tags are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PromptType {
    #[default]
    Text,
    Image,
    Structured,
    Other(String),
}

impl PromptType {
    /// Map a raw `type` column value. Empty means `Text`; matching is case-sensitive.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "" | "TEXT" => PromptType::Text,
            "IMAGE" => PromptType::Image,
            "STRUCTURED" => PromptType::Structured,
            other => PromptType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PromptType::Text => "TEXT",
            PromptType::Image => "IMAGE",
            PromptType::Structured => "STRUCTURED",
            PromptType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PromptType {
    fn from(value: String) -> Self {
        PromptType::from_raw(&value)
    }
}

impl From<PromptType> for String {
    fn from(value: PromptType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: PromptId,
    pub act: String,
    pub prompt: String,
    pub for_devs: bool,
    #[serde(rename = "type")]
    pub prompt_type: PromptType,
    pub contributor: String,
}
