//! Catalog text parsing.
//!
//! Two pure stages turn the bundled CSV text into records:
//!
//! - [`csv`]: a two-state scanner producing rows of string fields. Quoted fields may hold
//!   commas, newlines and doubled quotes. It never fails; an unterminated quote swallows the
//!   remainder of the input.
//! - [`records`]: skips the header row and projects each data row onto the fixed
//!   `act,prompt,for_devs,type,contributor` shape, filling defaults for short or empty
//!   columns. Rows with an empty prompt are dropped silently.
//!
//! Neither stage returns errors. Input validation (size caps, file access) belongs to the
//! caller; see [`crate::catalog::Catalog::from_path`].

pub mod csv;
pub mod records;

pub use csv::{CsvScan, Document, Field, Row, parse_document, scan_document};
pub use records::{field_or_default, load_prompts, normalize};
