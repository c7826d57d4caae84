pub mod source;
pub mod terminal;

pub use source::{MAX_SOURCE_SIZE_BYTES, read_source_file, validate_file_size};
pub use terminal::{sanitize_for_terminal, single_line};
