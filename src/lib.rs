//! # numera
//!
//! numera is a small arithmetic calculator written in Rust. It evaluates
//! infix expressions with the standard operators, unary sign, grouping,
//! absolute-value bars, exponentiation, and both real (`/`) and integer
//! (`//`) division, and keeps a flat-file history of successful
//! evaluations.

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

use crate::evaluator::Evaluator;

/// Provides the error type shared by every stage of evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression, from syntax problems to division by zero. Each error carries
/// the character offset where it was detected for user feedback.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering every failure mode.
/// - Attaches character positions and detail to each variant.
/// - Integrates with the standard error handling traits.
pub mod error;
/// The evaluator module parses and computes expressions in one pass.
///
/// The evaluator is a recursive-descent parser that operates directly on
/// the input characters. There is no tokenizer and no syntax tree: each
/// grammar rule computes its numeric value the moment it recognizes its
/// input, and the cursor advances strictly left to right.
///
/// # Responsibilities
/// - Implements the expression grammar, one method per rule.
/// - Applies operator precedence and associativity during the descent.
/// - Reports syntax and arithmetic errors with their character position.
pub mod evaluator;
/// The history module persists evaluation records to a flat file.
///
/// Each successful evaluation is stored as one `<input> = <result>` line.
/// The file is loaded in full at startup and rewritten in full after each
/// new record.
///
/// # Responsibilities
/// - Loads, appends to, and saves the record file.
/// - Formats results consistently for records and display.
/// - Treats a missing file as an empty history.
pub mod history;

/// Evaluates an arithmetic expression and returns its value.
///
/// This is the single entry point of the evaluator. It is a pure function
/// of its input: no state survives between calls, and re-evaluating the
/// same string always yields the same result.
///
/// # Errors
/// Returns the first [`error::EvalError`] encountered; the whole evaluation
/// aborts on that failure.
///
/// # Examples
/// ```
/// use numera::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
/// assert_eq!(evaluate("|-5|").unwrap(), 5.0);
///
/// // Division by zero is reported, not computed.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, error::EvalError> {
    Evaluator::new(source).run()
}
