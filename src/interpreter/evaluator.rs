/// Core evaluation logic.
///
/// Contains the evaluator state, the dispatch over node kinds and literal
/// evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Implements wrapping addition, subtraction and multiplication.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements wrapping negation.
pub mod unary;

pub use self::core::Evaluator;
