/// Core parsing logic.
///
/// Contains the parser state, the entry points and the token access helpers
/// shared by every grammar level.
pub mod core;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative levels, including their
/// bounded-lookahead grouping of operator chains.
pub mod binary;

/// Primary expression parsing.
///
/// Handles integer literals and parenthesized subexpressions.
pub mod primary;

pub use self::core::{ParseOutcome, Parser, parse};
