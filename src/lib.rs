//! # radixa
//!
//! radixa is a small numeric toolkit written in Rust: integer conversion
//! between arbitrary bases with custom digit alphabets, approximate float
//! equality, and truncation and rounding built from primitive arithmetic.
//!
//! The helpers can be called directly or through a tiny line based script
//! language, which is also what the `radixa` binary evaluates.

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

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::eval,
        lexer::{Token, tokenize},
        parser::core::parse_statement,
    },
};

/// Approximate equality for floating-point numbers.
///
/// Provides the fixed tolerance comparison used throughout the crate and a
/// variant with caller supplied tolerances. Comparisons are strict: a
/// difference equal to the tolerance is not close.
pub mod approx;
/// Defines the structure of parsed scripts.
///
/// Each script line is parsed into an `Expr` tree of literals, negations and
/// builtin calls, tagged with line numbers for error reporting.
pub mod ast;
/// Provides unified error types for the helpers and the script driver.
///
/// # Responsibilities
/// - `NumericError` for invalid bases, digit maps, numerals, ranges and
///   types, classified as `InvalidArgument` or `TypeError`.
/// - `ParseError` and `RuntimeError` for scripts, carrying line numbers.
/// - Integration with `std::error::Error`, including error sources.
pub mod error;
/// Orchestrates the evaluation of scripts.
///
/// Ties together lexing, parsing and evaluation and exposes the builtin
/// functions that scripts can call.
pub mod interpreter;
/// Conversion of integers between numeral bases.
///
/// # Responsibilities
/// - Validates bases and digit maps when an encoder is built.
/// - Decodes numerals written with a source alphabet.
/// - Encodes integers with a target alphabet, preserving the sign.
pub mod radix;
/// Truncation and rounding without the standard rounding helpers.
pub mod rounding;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64`, `u64` and `f64` without silent data loss.
/// - Apply signs to unsigned magnitudes with overflow detection.
pub mod util;
/// The dynamically typed value passed to the rounding helpers and between
/// script builtins.
pub mod value;

pub use approx::{approx_equal, approx_equal_with};
pub use error::{ErrorKind, NumericError};
pub use radix::{BaseEncoder, convert, decode};
pub use rounding::{round, round_away_from_zero, truncate};
pub use value::Value;

/// Evaluates every line of a script and returns the last value produced.
///
/// Blank lines and comments are skipped. Evaluation stops at the first error.
///
/// # Errors
/// Returns a `ParseError` for malformed input or a `RuntimeError` for a
/// failing builtin call.
///
/// # Examples
/// ```
/// use radixa::{evaluate, value::Value};
///
/// let last = evaluate("convert(255, 16, \"0123456789ABCDEF\")").unwrap();
/// assert_eq!(last, Some(Value::from("FF")));
///
/// assert_eq!(evaluate("// nothing here").unwrap(), None);
/// assert!(evaluate("trunc(\"abc\")").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source).map_err(|(token, line)| ParseError::UnexpectedToken { token,
                                                                                         line })?;

    let mut iter = tokens.iter().peekable();
    let mut result = None;

    while iter.peek().is_some() {
        while let Some((Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }
        let expr = parse_statement(&mut iter)?;
        result = Some(eval(&expr)?);
    }

    Ok(result)
}

/// Runs a script, optionally printing the last value produced.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use radixa::get_result;
///
/// // The assertion holds, so no error is produced.
/// let source = "assert_eq(round_away(2.5), 3)";
/// assert!(get_result(source, false).is_ok());
///
/// // Base 1 does not exist.
/// let source = "convert(3, 1, \"0\")";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = evaluate(source)?;

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
