use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the tangent of a value in radians.
///
/// If the result is not a number the operand had no tangent, and the error
/// names it; otherwise the tangent is returned as-is.
///
/// # Parameters
/// - `operand`: The angle in radians.
///
/// # Returns
/// The tangent, or `RuntimeError::TangentUndefined`.
///
/// # Example
/// ```
/// use tortue::interpreter::evaluator::function::tangent::tangent;
///
/// assert_eq!(tangent(0.0).unwrap(), 0.0);
/// assert!(tangent(f64::INFINITY).is_err());
/// ```
pub fn tangent(operand: f64) -> EvalResult<f64> {
    let result = operand.tan();
    if result.is_nan() {
        return Err(RuntimeError::TangentUndefined { operand });
    }
    Ok(result)
}
