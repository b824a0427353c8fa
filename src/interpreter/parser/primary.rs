use tracing::trace;

use crate::{
    ast::{Expr, Subtree},
    error::ParseError,
    interpreter::{lexer::TokenKind, parser::core::Parser},
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses a primary (atomic) expression.
    ///
    /// Grammar:
    /// ```text
    ///     primary := integer
    ///              | "(" expression ")"
    /// ```
    ///
    /// On a syntax error the offending token is left unconsumed, the error is
    /// reported and the result is an absent subtree. An unclosed parenthesis
    /// discards the subexpression parsed inside it.
    pub fn parse_primary(&mut self) -> Subtree {
        ensure_sufficient_stack(|| {
            let token = self.peek();

            match token.kind {
                TokenKind::Integer => {
                    self.advance();
                    trace!(text = %token.text, position = token.position, "literal");
                    Expr::literal(token)
                },
                TokenKind::LParen => {
                    self.advance();
                    let inner = self.parse_expression();

                    let closing = self.peek();
                    if !closing.is(TokenKind::RParen) {
                        self.report(ParseError::ExpectedClosingParen { position: closing.position });
                        return None;
                    }

                    self.advance();
                    inner
                },
                _ => {
                    self.report(ParseError::UnexpectedToken { token:    token.text,
                                                              position: token.position, });
                    None
                },
            }
        })
    }
}
