//! # reckon
//!
//! reckon is an interactive integer calculator written in Rust.
//! It evaluates arithmetic expressions with variables, nested parentheses and
//! the usual operator precedence, one line at a time, keeping variables for
//! the lifetime of a session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::session::{Outcome, Session};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while a line is
/// normalized, tokenized or evaluated, and the session-level error that
/// wraps them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, commands).
/// - Keeps the messages shown to the user short and stable.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of a line of input.
///
/// This module ties together normalization, tokenizing, group resolution,
/// reduction and assignment, and exposes the [`Session`] that owns the
/// variables.
///
/// # Responsibilities
/// - Coordinates all pipeline stages.
/// - Provides entry points for processing lines and evaluating expressions.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// The line-oriented read-evaluate-print loop.
pub mod repl;

pub use error::Error;

/// Evaluates every line of `source` in a fresh session and returns the last
/// printed value.
///
/// Blank lines and assignments print nothing; `/exit` stops early; `/help`
/// is accepted and ignored.
///
/// # Errors
/// Returns the first error encountered.
///
/// # Examples
/// ```
/// use reckon::get_result;
///
/// let source = "width = 6\nheight = 7\nwidth * height";
/// assert_eq!(get_result(source).unwrap(), Some(42));
///
/// // 'depth' was never assigned.
/// assert!(get_result("width = 6\nwidth * depth").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<i64>, Error> {
    let mut session = Session::new();
    let mut result = None;

    for line in source.lines() {
        match session.process(line)? {
            Outcome::Value(value) => result = Some(value),
            Outcome::Exit => break,
            Outcome::Silent | Outcome::Help => {},
        }
    }

    Ok(result)
}
