//! Derived views over the catalog records.
//!
//! - [`query`]: free-text search plus category, the primary browse view
//! - [`parser`] / [`apply`]: `field:value` filter expressions (`type:`, `contributor:`, `dev:`)
//!
//! Nothing here mutates records; every function returns borrowed matches in catalog order.

pub mod apply;
pub mod ast;
pub mod parser;
pub mod query;

pub use apply::{apply_filters, evaluate_filter};
pub use ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
pub use parser::parse_filter;
pub use query::{PromptQuery, filter_prompts, matches_search};
