//! Quote-aware CSV scanner.
//!
//! A single left-to-right pass over the input with one character of lookahead and two
//! states. Quoted fields may contain commas, newlines and doubled quotes (`""` -> `"`).
//! The scanner is total: malformed quoting never fails, an unterminated quoted field just
//! absorbs the rest of the input.

use std::iter::Peekable;
use std::str::Chars;

/// One value between delimiters
pub type Field = String;

/// Ordered fields of one CSV line (or several lines, when a quoted field spans them)
pub type Row = Vec<Field>;

/// Ordered rows of one input text
pub type Document = Vec<Row>;

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    InQuotes,
}

/// Result of scanning a text, including whether the input ended inside quotes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CsvScan {
    pub document: Document,
    pub unterminated_quote: bool,
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    state: State,
    current_field: String,
    current_row: Row,
    document: Document,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
            state: State::Unquoted,
            current_field: String::new(),
            current_row: Vec::new(),
            document: Vec::new(),
        }
    }

    fn close_field(&mut self) {
        self.current_row.push(std::mem::take(&mut self.current_field));
    }

    fn close_row(&mut self) {
        self.close_field();
        self.document.push(std::mem::take(&mut self.current_row));
    }

    fn run(mut self) -> CsvScan {
        while let Some(ch) = self.chars.next() {
            match self.state {
                State::InQuotes => match ch {
                    '"' => {
                        if self.chars.peek() == Some(&'"') {
                            self.chars.next();
                            self.current_field.push('"');
                        } else {
                            self.state = State::Unquoted;
                        }
                    }
                    _ => self.current_field.push(ch),
                },
                State::Unquoted => match ch {
                    '"' => self.state = State::InQuotes,
                    ',' => self.close_field(),
                    '\n' => self.close_row(),
                    '\r' => {}
                    _ => self.current_field.push(ch),
                },
            }
        }

        // Flush a trailing row that had no final newline, but never invent an empty one
        if !self.current_field.is_empty() || !self.current_row.is_empty() {
            self.close_row();
        }

        CsvScan { document: self.document, unterminated_quote: self.state == State::InQuotes }
    }
}

/// Scan `text` into rows, reporting an unterminated quoted field
pub fn scan_document(text: &str) -> CsvScan {
    Scanner::new(text).run()
}

/// Parse `text` into rows of fields.
///
/// # Examples
///
/// ```
/// use prompt_catalog::parsers::csv::parse_document;
///
/// let rows = parse_document("a,\"b,c\",d\n");
/// assert_eq!(rows, vec![vec!["a", "b,c", "d"]]);
/// ```
pub fn parse_document(text: &str) -> Document {
    scan_document(text).document
}
