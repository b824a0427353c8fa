//! # tally
//!
//! tally is a small integer arithmetic evaluator written in Rust.
//! It scans, parses, and evaluates expressions over non-negative integer
//! literals with `+`, `-`, `*` and parentheses, recovering from malformed
//! input instead of rejecting it.

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
    error::Diagnostics,
    interpreter::{evaluator::Evaluator, parser::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and traversed by
/// the evaluator.
///
/// # Responsibilities
/// - Defines literal, unary and binary nodes with uniquely owned children.
/// - Models subtrees lost to syntax errors as explicit absent values.
/// - Renders trees in prefix form for inspection.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// None of these errors stop the pipeline. They are collected as diagnostics
/// next to the numeric result, each with the byte offset it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Collects them in order into a `Diagnostics` list.
/// - Implements the standard error traits so strict callers can use `?`.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the scanner, the parser and the evaluator.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser and evaluator.
/// - Passes diagnostics from one phase to the next.
pub mod interpreter;
/// General helpers for numeric conversion and stack growth.
pub mod util;

/// The value of an expression together with everything reported while
/// computing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The result as raw 64-bit wrapping arithmetic.
    pub value:       u64,
    /// Diagnostics from every phase, in the order they were raised.
    pub diagnostics: Diagnostics,
}

impl Evaluation {
    /// The result reinterpreted as a signed integer.
    #[must_use]
    pub const fn as_signed(&self) -> i64 {
        self.value.cast_signed()
    }

    /// Returns `true` if nothing was reported, meaning the result did not
    /// depend on any error recovery.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Converts to a strict result: the signed value if nothing was reported,
    /// otherwise every diagnostic.
    ///
    /// # Example
    /// ```
    /// use tally::evaluate_source;
    ///
    /// assert_eq!(evaluate_source("2 * 21").into_strict().ok(), Some(42));
    /// assert!(evaluate_source("2 * 21)").into_strict().is_err());
    /// ```
    pub fn into_strict(self) -> Result<i64, Diagnostics> {
        if self.diagnostics.is_empty() {
            Ok(self.value.cast_signed())
        } else {
            Err(self.diagnostics)
        }
    }
}

/// Scans, parses and evaluates `source`, keeping the diagnostics.
///
/// The tree is dropped before this function returns.
///
/// # Examples
/// ```
/// use tally::evaluate_source;
///
/// let evaluation = evaluate_source("(4 + 3 * 8) + 8 * 8 + (4 * 4)");
/// assert_eq!(evaluation.as_signed(), 108);
/// assert!(evaluation.is_clean());
///
/// // The malformed suffix is skipped and reported.
/// let evaluation = evaluate_source("12abc + 3");
/// assert_eq!(evaluation.as_signed(), 15);
/// assert_eq!(evaluation.diagnostics.len(), 1);
/// ```
#[must_use]
pub fn evaluate_source(source: &str) -> Evaluation {
    let mut outcome = parse(source);
    let value = Evaluator::new(&mut outcome.diagnostics).eval(outcome.tree.as_deref());

    Evaluation { value,
                 diagnostics: outcome.diagnostics }
}

/// Evaluates `source` and returns the signed result, ignoring diagnostics.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("4 + 3 * 8"), 28);
/// assert_eq!(evaluate("(4 + 3) * 8"), 56);
///
/// // Four same-level terms group as (10 - 4) - (3 - 2).
/// assert_eq!(evaluate("10 - 4 - 3 - 2"), 5);
///
/// // An unclosed parenthesis contributes zero.
/// assert_eq!(evaluate("(4 + 3"), 0);
/// ```
#[must_use]
pub fn evaluate(source: &str) -> i64 {
    evaluate_source(source).as_signed()
}
