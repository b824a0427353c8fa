use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr, Subtree},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// The rule is:
    /// `additive := multiplicative (("+" | "-") multiplicative (("+" | "-")
    /// additive)?)?`
    ///
    /// Up to two operators combine left to right. A third operator makes
    /// the rest of the chain a nested additive expression, so `1 - 2 - 3 - 4`
    /// is grouped as `(1 - 2) - (3 - 4)`.
    pub fn parse_additive(&mut self) -> Subtree {
        self.parse_bounded_chain(additive_operator,
                                 Self::parse_multiplicative,
                                 Self::parse_additive)
    }

    /// Parses multiplication expressions.
    ///
    /// The rule is:
    /// `multiplicative := primary ("*" primary ("*" multiplicative)?)?`
    ///
    /// Grouping follows the same bounded shape as [`Parser::parse_additive`].
    pub fn parse_multiplicative(&mut self) -> Subtree {
        self.parse_bounded_chain(multiplicative_operator,
                                 Self::parse_primary,
                                 Self::parse_multiplicative)
    }

    /// Parses one operator level with bounded lookahead.
    ///
    /// The first operator combines two single operands. If a second operator
    /// of the same level follows, the accumulated node becomes the left side
    /// and `rest` parses the remainder of the level as the right side.
    /// Operands that failed to parse are combined as absent subtrees.
    fn parse_bounded_chain(&mut self,
                           operator: fn(&Token) -> Option<BinaryOperator>,
                           operand: fn(&mut Self) -> Subtree,
                           rest: fn(&mut Self) -> Subtree)
                           -> Subtree {
        ensure_sufficient_stack(|| {
            let mut left = operand(self);

            let token = self.peek();
            if let Some(op) = operator(&token) {
                self.advance();
                let right = operand(self);
                trace!(%op, position = token.position, "binary");
                left = Expr::binary(op, left, right);

                let token = self.peek();
                if let Some(op) = operator(&token) {
                    self.advance();
                    let right = rest(self);
                    trace!(%op, position = token.position, "binary with nested rest");
                    left = Expr::binary(op, left, right);
                }
            }

            left
        })
    }
}

/// Maps a token to its binary operator.
///
/// Returns `None` for tokens that are not operators.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let plus = Token::new("+", TokenKind::Add, 0);
/// assert_eq!(token_to_binary_operator(&plus), Some(BinaryOperator::Add));
///
/// let paren = Token::new("(", TokenKind::LParen, 0);
/// assert_eq!(token_to_binary_operator(&paren), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token.kind {
        TokenKind::Add => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Mul => Some(BinaryOperator::Mul),
        _ => None,
    }
}

/// Maps a token to an operator of the additive level.
fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    token_to_binary_operator(token).filter(|op| {
                                        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
                                    })
}

/// Maps a token to an operator of the multiplicative level.
fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    token_to_binary_operator(token).filter(|op| matches!(op, BinaryOperator::Mul))
}
