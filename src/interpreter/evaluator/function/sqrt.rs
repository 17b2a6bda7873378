use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the square root of a nonnegative value.
///
/// Negative operands have no real square root in this language; they raise
/// an error naming the operand instead of producing a NaN.
///
/// # Parameters
/// - `operand`: The value to take the root of.
///
/// # Returns
/// The square root, or `RuntimeError::NegativeSquareRoot`.
///
/// # Example
/// ```
/// use tortue::interpreter::evaluator::function::sqrt::square_root;
///
/// assert_eq!(square_root(9.0).unwrap(), 3.0);
/// assert!(square_root(-1.0).is_err());
/// ```
pub fn square_root(operand: f64) -> EvalResult<f64> {
    if operand < 0.0 {
        return Err(RuntimeError::NegativeSquareRoot { operand });
    }
    Ok(operand.sqrt())
}
