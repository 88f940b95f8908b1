//! Record filter expressions.
//!
//! # Syntax
//!
//! ```text
//! expr  := term (op? term)*
//! term  := field:value | field:"quoted value"
//! op    := AND | OR            (case-insensitive)
//! field := user | since | until
//! ```
//!
//! - `user:NAME` keeps messages from that sender (case-insensitive). Quote names with spaces.
//! - `since:YYYY-MM-DD` keeps messages on or after the date.
//! - `until:YYYY-MM-DD` keeps messages on or before the date.
//!
//! Without an explicit operator, terms on the same field are OR'd and terms on different
//! fields are AND'd, so `user:Alice user:Bob since:2024-01-01` keeps messages from either
//! sender sent in 2024 or later (evaluation is left to right).
//!
//! ```rust
//! # use chatlog_analyzer::filters::parse_filter;
//! let expr = parse_filter("user:\"Mom Cell\" since:2024-01-01 until:2024-06-30").unwrap();
//! assert_eq!(expr.filters.len(), 3);
//! ```

use anyhow::{Context, Result, anyhow, bail};
use chrono::NaiveDate;

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator, FilterValue};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Term { field: String, value: String },
    Op(FilterOperator),
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let mut word = String::new();
        let mut in_quotes = false;
        let mut quoted = false;
        while let Some(&ch) = chars.peek() {
            if ch.is_whitespace() && !in_quotes {
                break;
            }
            chars.next();
            if ch == '"' {
                in_quotes = !in_quotes;
                quoted = true;
                continue;
            }
            word.push(ch);
        }

        if in_quotes {
            bail!("Unterminated quoted value in filter");
        }

        if !quoted {
            match word.to_uppercase().as_str() {
                "AND" => {
                    tokens.push(Token::Op(FilterOperator::And));
                    continue;
                }
                "OR" => {
                    tokens.push(Token::Op(FilterOperator::Or));
                    continue;
                }
                _ => {}
            }
        }

        let Some((field, value)) = word.split_once(':') else {
            bail!("Invalid token: '{}' (expected field:value or AND/OR)", word);
        };
        if field.is_empty() || value.is_empty() {
            bail!("Invalid field:value format: '{}'", word);
        }
        tokens.push(Token::Term { field: field.to_string(), value: value.to_string() });
    }

    Ok(tokens)
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    if value.len() != 10 {
        bail!("Invalid date for {}: '{}' (expected YYYY-MM-DD)", field, value);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date for {}: '{}' (expected YYYY-MM-DD)", field, value))
}

fn build_term(field: &str, value: String) -> Result<FieldFilter> {
    let filter_field = FilterField::parse(field)
        .ok_or_else(|| anyhow!("Unknown field: '{}' (valid fields: user, since, until)", field))?;

    let value = match filter_field {
        FilterField::User => FilterValue::Text(value),
        FilterField::Since | FilterField::Until => FilterValue::Date(parse_date(field, &value)?),
    };

    Ok(FieldFilter { field: filter_field, value })
}

/// Parse a filter string into a [`FilterExpr`]
///
/// An empty or blank string gives an empty expression, which keeps every record.
///
/// # Errors
///
/// Returns an error for unknown fields, empty values, malformed dates, unterminated quotes,
/// and misplaced operators.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    let mut expr = FilterExpr::new();
    let mut pending_op: Option<FilterOperator> = None;
    let mut last_field: Option<FilterField> = None;

    for token in tokens {
        match token {
            Token::Term { field, value } => {
                let term = build_term(&field, value)?;

                if let Some(prev) = last_field {
                    let op = pending_op.take().unwrap_or(if prev == term.field {
                        FilterOperator::Or
                    } else {
                        FilterOperator::And
                    });
                    expr.add_operator(op);
                }

                last_field = Some(term.field);
                expr.add_filter(term);
            }
            Token::Op(op) => {
                if last_field.is_none() || pending_op.is_some() {
                    bail!("Unexpected {:?} operator (expected field:value)", op);
                }
                pending_op = Some(op);
            }
        }
    }

    if pending_op.is_some() {
        bail!("Filter ended with operator (expected field:value)");
    }

    Ok(expr)
}
