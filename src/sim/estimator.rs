//! Monte Carlo estimate of the expected attempts for one C-value.

use rand::Rng;

use crate::error::AppError;
use crate::sim::trial::run_trial;

/// Mean outcome of `sample_count` independent trials at `c`.
pub fn estimate_ev<R: Rng + ?Sized>(c: f64, sample_count: usize, rng: &mut R) -> Result<f64, AppError> {
    if sample_count == 0 {
        return Err(AppError::invalid_config("Sample count must be > 0."));
    }

    let mut sum: u128 = 0;
    for _ in 0..sample_count {
        sum += u128::from(run_trial(c, rng)?);
    }

    Ok(sum as f64 / sample_count as f64)
}
