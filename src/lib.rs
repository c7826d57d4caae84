//! Prompt Catalog - Browse, search and copy prompts from a CSV prompt catalog
//!
//! The catalog is a CSV file with the columns `act,prompt,for_devs,type,contributor`. A copy
//! is bundled into the binary; another file can be loaded instead. This library provides:
//!
//! - A quote-aware CSV scanner and a record normalizer that never fail
//! - Search, category and `field:value` filter views over the records
//! - Summary statistics, clipboard copy and an interactive terminal browser
//!
//! # Example
//!
//! ```
//! use prompt_catalog::load_prompts;
//!
//! let text = "act,prompt,for_devs,type,contributor\n\
//!             Linux Terminal,\"Act as a terminal, reply with output\",TRUE,TEXT,f\n";
//! let records = load_prompts(text);
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].id.to_string(), "prompt-0");
//! assert_eq!(records[0].prompt, "Act as a terminal, reply with output");
//! assert!(records[0].for_devs);
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use catalog::Catalog;
pub use models::{Category, PromptId, PromptRecord, PromptStats, PromptType};
pub use parsers::csv::{parse_document, scan_document};
pub use parsers::records::{load_prompts, normalize};
