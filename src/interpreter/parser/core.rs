use tracing::debug;

use crate::{
    ast::Subtree,
    error::{Diagnostics, ParseError},
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// The result of parsing one expression.
///
/// Parsing never fails outright: `tree` holds whatever could be built, and
/// `diagnostics` lists every problem met along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed tree, absent if nothing usable was found.
    pub tree:        Subtree,
    /// Lexical and syntax diagnostics in the order they were raised.
    pub diagnostics: Diagnostics,
}

/// Recursive-descent parser state for one expression.
///
/// The parser owns its [`Scanner`] and is the only thing that advances it.
/// Each grammar level is a method; see [`Parser::parse_expression`] for the
/// entry point.
pub struct Parser<'src> {
    scanner:     Scanner<'src>,
    diagnostics: Diagnostics,
}

impl<'src> Parser<'src> {
    /// Creates a parser at the start of `source`.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { scanner:     Scanner::new(source),
               diagnostics: Diagnostics::new(), }
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, addition, and recursively descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := additive`
    pub fn parse_expression(&mut self) -> Subtree {
        self.parse_additive()
    }

    /// Returns the token at the cursor without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Token {
        self.scanner.peek(&mut self.diagnostics)
    }

    /// Consumes the token returned by the last [`Parser::peek`].
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.scanner.advance();
    }

    /// Records a syntax error.
    pub(in crate::interpreter::parser) fn report(&mut self, error: ParseError) {
        self.diagnostics.report(error);
    }

    /// Finishes the session, returning `tree` with everything reported so far.
    ///
    /// Any token left after `tree` is reported as trailing input; it does not
    /// change the tree.
    #[must_use]
    pub fn finish(mut self, tree: Subtree) -> ParseOutcome {
        let next = self.peek();
        if !next.is(TokenKind::None) {
            debug!(position = next.position, "input left after expression");
            self.report(ParseError::TrailingInput { token:    next.text,
                                                    position: next.position, });
        }

        ParseOutcome { tree,
                       diagnostics: self.diagnostics }
    }
}

/// Parses `source` as a single expression.
///
/// # Example
/// ```
/// use tally::interpreter::parser::parse;
///
/// let outcome = parse("(4 + 3) * 8");
/// assert!(outcome.tree.is_some());
/// assert!(outcome.diagnostics.is_empty());
///
/// let outcome = parse("(4 + 3");
/// assert!(outcome.tree.is_none());
/// assert_eq!(outcome.diagnostics.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> ParseOutcome {
    let mut parser = Parser::new(source);
    let tree = parser.parse_expression();
    parser.finish(tree)
}
