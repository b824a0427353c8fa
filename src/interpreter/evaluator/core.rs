use crate::{
    ast::Expr,
    error::{Diagnostics, RuntimeError},
    interpreter::lexer::Token,
    util::{
        num::{MAX_LITERAL, parse_decimal_checked},
        stack::ensure_sufficient_stack,
    },
};

/// Walks a syntax tree and computes its value.
///
/// Arithmetic is done on `u64` with wraparound; callers that want a signed
/// result reinterpret the bits as `i64`. Evaluation never fails. Problems
/// such as oversized literals are reported to the borrowed diagnostics and a
/// substitute value is used.
///
/// ## Usage
///
/// The evaluator borrows the diagnostics of the parse it evaluates, so parse
/// and evaluation problems end up in one list, in the order they happened.
///
/// ```
/// use tally::interpreter::{evaluator::Evaluator, parser::parse};
///
/// let mut outcome = parse("(4 + 3) * 8");
/// let value = Evaluator::new(&mut outcome.diagnostics).eval(outcome.tree.as_deref());
///
/// assert_eq!(value, 56);
/// ```
pub struct Evaluator<'d> {
    diagnostics: &'d mut Diagnostics,
}

impl<'d> Evaluator<'d> {
    /// Creates an evaluator that reports into `diagnostics`.
    #[must_use]
    pub const fn new(diagnostics: &'d mut Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Evaluates a possibly absent tree and returns its value.
    ///
    /// Children are evaluated before their parent, left before right. An
    /// absent tree evaluates to zero without a diagnostic; this is how
    /// operands lost to syntax errors take part in the result.
    pub fn eval(&mut self, tree: Option<&Expr>) -> u64 {
        let Some(expr) = tree else {
            return 0;
        };

        ensure_sufficient_stack(|| match expr {
            Expr::Literal { token } => self.eval_literal(token),
            Expr::UnaryOp { op, operand } => self.eval_unary_op(*op, operand.as_deref()),
            Expr::BinaryOp { left, op, right } => {
                self.eval_binary_op(left.as_deref(), *op, right.as_deref())
            },
        })
    }

    /// Evaluates an integer literal.
    ///
    /// A literal above `i64::MAX` is clamped to `i64::MAX` and reported.
    fn eval_literal(&mut self, token: &Token) -> u64 {
        parse_decimal_checked(&token.text, ()).unwrap_or_else(|()| {
                                                  self.diagnostics
                                                      .report(RuntimeError::LiteralTooLarge {
                                                          text:     token.text.clone(),
                                                          position: token.position,
                                                      });
                                                  MAX_LITERAL
                                              })
    }
}
