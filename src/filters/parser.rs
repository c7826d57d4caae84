//! Filter expression parser.
//!
//! # Syntax
//!
//! ```text
//! filter_expr  := field_filter (operator? field_filter)*
//! field_filter := field:value | field:"quoted value"
//! operator     := AND | OR            (case-insensitive)
//! field        := type | contributor | dev   (case-insensitive)
//! ```
//!
//! # Examples
//!
//! ```rust
//! # use prompt_catalog::filters::parser::parse_filter;
//! let expr = parse_filter("type:image").unwrap();
//!
//! // Different fields: implicit AND
//! let expr = parse_filter("type:structured dev:true").unwrap();
//!
//! // Same field: implicit OR
//! let expr = parse_filter("contributor:alice contributor:bob").unwrap();
//!
//! // Quoted values may contain spaces
//! let expr = parse_filter("contributor:\"Jane Doe\" OR dev:yes").unwrap();
//! ```
//!
//! `dev` accepts `true`, `false`, `yes`, `no`. `type` accepts any tag, including ones outside
//! the known categories.

use std::iter::Peekable;
use std::str::Chars;

use anyhow::{Context, Result, anyhow};

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    FieldValue { field: String, value: String },
    And,
    Or,
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let word = read_word(&mut chars);

        match word.to_uppercase().as_str() {
            "AND" => tokens.push(Token::And),
            "OR" => tokens.push(Token::Or),
            _ => {
                let Some((field, raw_value)) = word.split_once(':') else {
                    return Err(anyhow!(
                        "Invalid token: '{}' (expected field:value or AND/OR)",
                        word
                    ));
                };

                let value = if raw_value.starts_with('"') {
                    read_quoted_value(&mut chars, raw_value)?
                } else {
                    raw_value.to_string()
                };

                if field.is_empty() || value.is_empty() {
                    return Err(anyhow!("Invalid field:value format: {}", word));
                }

                tokens.push(Token::FieldValue { field: field.to_string(), value });
            }
        }
    }

    Ok(tokens)
}

/// Read until whitespace or end
fn read_word(chars: &mut Peekable<Chars>) -> String {
    let mut word = String::new();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        word.push(ch);
        chars.next();
    }
    word
}

/// `initial` is the part of the word after the colon, starting with the opening quote
fn read_quoted_value(chars: &mut Peekable<Chars>, initial: &str) -> Result<String> {
    let mut value = initial[1..].to_string();

    if let Some(quote_pos) = value.find('"') {
        value.truncate(quote_pos);
        return Ok(value);
    }

    for ch in chars.by_ref() {
        if ch == '"' {
            return Ok(value);
        }
        value.push(ch);
    }

    Err(anyhow!("Unterminated quoted string"))
}

fn parse_field(field: &str) -> Result<FilterField> {
    match field.to_lowercase().as_str() {
        "type" => Ok(FilterField::Type),
        "contributor" | "by" => Ok(FilterField::Contributor),
        "dev" => Ok(FilterField::Dev),
        _ => Err(anyhow!("Unknown field: '{}' (valid fields: type, contributor, dev)", field)),
    }
}

/// Parse a `dev:` value
pub(crate) fn parse_dev_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

fn validate_value(field: &FilterField, value: &str) -> Result<()> {
    match field {
        FilterField::Dev => parse_dev_flag(value).map(|_| ()).ok_or_else(|| {
            anyhow!("Invalid dev value: '{}' (must be true/false or yes/no)", value)
        }),
        FilterField::Type | FilterField::Contributor => Ok(()),
    }
}

/// Parse a filter string into a [`FilterExpr`]. Blank input yields an empty expression.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    let mut expr = FilterExpr::new();
    let mut expecting_filter = true;
    let mut last_field: Option<FilterField> = None;

    for token in tokens {
        match token {
            Token::FieldValue { field, value } => {
                let filter_field = parse_field(&field)?;
                validate_value(&filter_field, &value)?;

                // No keyword since the previous filter: insert the implicit operator
                if !expecting_filter {
                    let implicit_op = match &last_field {
                        Some(prev) if prev == &filter_field => FilterOperator::Or,
                        _ => FilterOperator::And,
                    };
                    expr.add_operator(implicit_op);
                }

                expr.add_filter(FieldFilter::new(filter_field.clone(), value));
                last_field = Some(filter_field);
                expecting_filter = false;
            }
            Token::And | Token::Or => {
                if expecting_filter {
                    return Err(anyhow!("Unexpected operator (expected field:value)"));
                }
                let op = if token == Token::And { FilterOperator::And } else { FilterOperator::Or };
                expr.add_operator(op);
                expecting_filter = true;
            }
        }
    }

    if expecting_filter && !expr.is_empty() {
        return Err(anyhow!("Filter ended with operator (expected field:value)"));
    }

    Ok(expr)
}
