/// Lexical errors.
///
/// Defines the errors raised while scanning source text into tokens:
/// characters that cannot start a token and numeric literals followed by a
/// malformed suffix.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree,
/// such as unexpected tokens, unbalanced parentheses and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a syntax tree.
/// Evaluation never aborts, so these are recorded alongside a result.
pub mod runtime_error;
/// Diagnostics.
///
/// Unifies lexical, parse and runtime errors into a single ordered collection
/// that is reported to the caller next to the numeric result.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
