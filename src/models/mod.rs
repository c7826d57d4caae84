//! Data models for the prompt catalog.
//!
//! - [`PromptRecord`] - One normalized catalog entry
//! - [`PromptId`] - Row-position identifier, displayed as `prompt-<n>`
//! - [`PromptType`] - Category tag of a record (`TEXT`, `IMAGE`, `STRUCTURED` or other)
//! - [`Category`] - Category filter with the `ALL` sentinel
//! - [`PromptStats`] - Summary counts over a set of records
//!
//! Records are produced once by the loader and never mutated afterwards.

pub mod category;
pub mod prompt;
pub mod stats;

pub use category::Category;
pub use prompt::{PromptId, PromptRecord, PromptType};
pub use stats::PromptStats;
