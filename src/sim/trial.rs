//! A single "roll until success" trial.
//!
//! The success probability of attempt `N` (1-indexed) is `C * N`. Once `C * N`
//! reaches 1 the attempt cannot fail, so a trial takes at most `ceil(1/C)`
//! attempts.

use rand::Rng;

use crate::error::AppError;

/// Upper bound on the attempts a trial can take for `0 < c <= 1`.
pub fn max_attempts(c: f64) -> u64 {
    (1.0 / c).ceil() as u64
}

/// Roll until success and return the attempt index that succeeded.
///
/// Fails with `ErrorKind::InvalidParameter` for `c <= 0` (and NaN).
/// Any `c > 1` succeeds on the first attempt.
pub fn run_trial<R: Rng + ?Sized>(c: f64, rng: &mut R) -> Result<u64, AppError> {
    if !(c > 0.0) {
        return Err(AppError::invalid_parameter(c));
    }
    if c > 1.0 {
        return Ok(1);
    }

    let mut n: u64 = 1;
    loop {
        let chance = c * n as f64;
        // A draw in [0, 1) always lands at or below a chance of 1.
        if chance >= 1.0 {
            return Ok(n);
        }
        let roll: f64 = rng.r#gen();
        if roll <= chance {
            return Ok(n);
        }
        n += 1;
    }
}
