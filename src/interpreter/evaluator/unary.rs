use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::Evaluator,
};

impl Evaluator<'_> {
    /// Evaluates the operand and applies a unary operator.
    pub(in crate::interpreter::evaluator) fn eval_unary_op(&mut self,
                                                           op: UnaryOperator,
                                                           operand: Option<&Expr>)
                                                           -> u64 {
        let value = self.eval(operand);
        Self::apply_unary(op, value)
    }

    /// Applies a unary operator with wraparound modulo 2^64.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::UnaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::apply_unary(UnaryOperator::Negate, 5).cast_signed(), -5);
    /// assert_eq!(Evaluator::apply_unary(UnaryOperator::Negate, 0), 0);
    /// ```
    #[must_use]
    pub const fn apply_unary(op: UnaryOperator, value: u64) -> u64 {
        match op {
            UnaryOperator::Negate => value.wrapping_neg(),
        }
    }
}
