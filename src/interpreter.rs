/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree in post order and combines literal values
/// with wrapping 64-bit arithmetic. Absent subtrees left behind by parse
/// errors evaluate to zero.
///
/// # Responsibilities
/// - Evaluates literal, unary and binary nodes.
/// - Reports literals that do not fit the result type.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and hands out one token at a
/// time through a peek-then-advance protocol. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and position.
/// - Recovers from malformed numeric suffixes such as `12abc`.
/// - Reports lexical errors for invalid characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser drives the scanner and constructs an AST for the `+`, `-`, `*`
/// and parenthesized grammar. Errors never abort parsing: a failed operand
/// becomes an absent subtree and parsing continues around it.
///
/// # Responsibilities
/// - Converts tokens into AST nodes with the two-level precedence grammar.
/// - Groups same-level operator chains with bounded lookahead.
/// - Reports syntax errors with their source offsets.
pub mod parser;
