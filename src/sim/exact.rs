//! Exact expected attempts, used to judge how far the estimates drift.
//!
//! `E[N] = sum_{n >= 0} P(N > n)` where `P(N > n) = prod_{k=1..n} (1 - min(1, C*k))`.
//! The survival term decays like `exp(-C n^2 / 2)`, so the series is cut once it
//! falls under `SURVIVAL_CUTOFF`; for C = 1e-10 that is about a million terms.

use crate::error::AppError;

const SURVIVAL_CUTOFF: f64 = 1e-17;

pub fn exact_ev(c: f64) -> Result<f64, AppError> {
    if !(c > 0.0) {
        return Err(AppError::invalid_parameter(c));
    }
    if c >= 1.0 {
        return Ok(1.0);
    }

    let mut total = 0.0;
    let mut survival = 1.0;
    let mut k: u64 = 1;
    loop {
        total += survival;
        survival *= 1.0 - (c * k as f64).min(1.0);
        if survival <= SURVIVAL_CUTOFF {
            return Ok(total);
        }
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_closed_forms() {
        assert!((exact_ev(0.5).unwrap() - 1.5).abs() < 1e-12);
        assert!((exact_ev(0.9).unwrap() - 1.1).abs() < 1e-12);
        assert!((exact_ev(0.25).unwrap() - 2.21875).abs() < 1e-12);
        assert_eq!(exact_ev(1.0).unwrap(), 1.0);
        assert_eq!(exact_ev(4.0).unwrap(), 1.0);
    }

    #[test]
    fn tiny_c_approaches_rayleigh_mean() {
        // For small C the attempt count is approximately Rayleigh with mean sqrt(pi / (2C)).
        let c = 1e-8;
        let approx = (std::f64::consts::PI / (2.0 * c)).sqrt();
        let ev = exact_ev(c).unwrap();
        assert!((ev - approx).abs() / approx < 1e-3, "ev={ev} approx={approx}");
    }

    #[test]
    fn decreases_as_c_grows() {
        let mut prev = f64::INFINITY;
        for c in [1e-6, 1e-4, 0.01, 0.1, 0.3, 0.7, 1.0] {
            let ev = exact_ev(c).unwrap();
            assert!(ev < prev, "c={c}");
            prev = ev;
        }
    }

    #[test]
    fn rejects_non_positive_c() {
        assert!(exact_ev(0.0).is_err());
        assert!(exact_ev(-1.0).is_err());
    }
}
