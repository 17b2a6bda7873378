use rand::{Rng, rngs::StdRng};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Draws a uniformly distributed value from `[lower, upper)`.
///
/// The interval must be non-empty and both bounds must be finite — a NaN or
/// infinite bound leaves no interval to draw from. Invalid intervals raise
/// an error describing both bounds.
///
/// # Parameters
/// - `rng`: The context's random generator.
/// - `lower`: Inclusive lower bound.
/// - `upper`: Exclusive upper bound.
///
/// # Returns
/// A value in `[lower, upper)`, or `RuntimeError::InvalidRandomRange`.
///
/// # Example
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use tortue::interpreter::evaluator::function::random::random_between;
///
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let value = random_between(&mut rng, 2.0, 5.0).unwrap();
/// assert!((2.0..5.0).contains(&value));
///
/// // Empty interval: lower is not below upper.
/// assert!(random_between(&mut rng, 5.0, 2.0).is_err());
/// ```
pub fn random_between(rng: &mut StdRng, lower: f64, upper: f64) -> EvalResult<f64> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(RuntimeError::InvalidRandomRange { lower, upper });
    }
    Ok(rng.gen_range(lower..upper))
}
