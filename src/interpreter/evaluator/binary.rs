use crate::{
    ast::{Ast, BinaryOp, NodeId},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is always evaluated before the right one; the order
    /// is observable whenever an operand prints or assigns, and an error in
    /// the left operand prevents the right one from running at all.
    /// Division by exactly zero is refused before any quotient is computed,
    /// so no floating-point exception or infinity ever escapes. `^` is
    /// exponentiation.
    ///
    /// # Parameters
    /// - `ast`: The program tree.
    /// - `op`: The operator.
    /// - `lhs`: Left operand handle.
    /// - `rhs`: Right operand handle.
    ///
    /// # Returns
    /// The computed value, or the first error raised by an operand or by the
    /// zero guard.
    pub(crate) fn eval_binop(&mut self,
                             ast: &Ast,
                             op: BinaryOp,
                             lhs: NodeId,
                             rhs: NodeId)
                             -> EvalResult<f64> {
        let left = self.eval(ast, lhs)?;
        let right = self.eval(ast, rhs)?;

        match op {
            BinaryOp::Add => Ok(left + right),
            BinaryOp::Sub => Ok(left - right),
            BinaryOp::Mul => Ok(left * right),
            BinaryOp::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(left / right)
            },
            BinaryOp::Pow => Ok(left.powf(right)),
        }
    }
}
