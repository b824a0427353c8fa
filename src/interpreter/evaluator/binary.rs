use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::Evaluator,
};

impl Evaluator<'_> {
    /// Evaluates both operands, left first, and combines them.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: Option<&Expr>,
                                                            op: BinaryOperator,
                                                            right: Option<&Expr>)
                                                            -> u64 {
        let left = self.eval(left);
        let right = self.eval(right);
        Self::apply_binary(op, left, right)
    }

    /// Applies a binary operator with wraparound modulo 2^64.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::BinaryOperator, interpreter::evaluator::Evaluator};
    ///
    /// assert_eq!(Evaluator::apply_binary(BinaryOperator::Mul, 6, 7), 42);
    ///
    /// // Subtraction wraps instead of failing; as i64 this is -1.
    /// assert_eq!(Evaluator::apply_binary(BinaryOperator::Sub, 2, 3), u64::MAX);
    /// ```
    #[must_use]
    pub const fn apply_binary(op: BinaryOperator, left: u64, right: u64) -> u64 {
        match op {
            BinaryOperator::Add => left.wrapping_add(right),
            BinaryOperator::Sub => left.wrapping_sub(right),
            BinaryOperator::Mul => left.wrapping_mul(right),
        }
    }
}
