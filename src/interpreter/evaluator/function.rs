/// Tangent with its domain check.
pub mod tangent;

/// Square root with its negative-operand check.
pub mod sqrt;

/// Uniform random draw over a half-open interval.
pub mod random;

use crate::{
    ast::{Ast, Func},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context<'_> {
    /// Evaluates a built-in function call.
    ///
    /// Arguments are evaluated in source order, each one propagating its
    /// error before the next is touched. `sin` and `cos` delegate straight
    /// to the floating-point library; the remaining builtins guard their
    /// domains and report a `RuntimeError` naming the offending input.
    pub(crate) fn eval_function(&mut self, ast: &Ast, func: &Func) -> EvalResult<f64> {
        match func {
            Func::Sin(arg) => Ok(self.eval(ast, *arg)?.sin()),
            Func::Cos(arg) => Ok(self.eval(ast, *arg)?.cos()),
            Func::Tan(arg) => {
                let operand = self.eval(ast, *arg)?;
                tangent::tangent(operand)
            },
            Func::Sqrt(arg) => {
                let operand = self.eval(ast, *arg)?;
                sqrt::square_root(operand)
            },
            Func::Random(lower, upper) => {
                let lower = self.eval(ast, *lower)?;
                let upper = self.eval(ast, *upper)?;
                random::random_between(&mut self.rng, lower, upper)
            },
        }
    }
}
