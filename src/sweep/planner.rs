//! C-value planning.
//!
//! Trial cost grows as C shrinks, so a uniform grid would either spend nearly
//! all the time at the bottom of the range or barely sample the top. Both
//! planners keep an integer index `i` and emit `C = c_step * i`; only the
//! stride of `i` changes, so there is no drift from repeated float additions.
//!
//! - `DigitSteps`: after `i` reaches `10^precision` the stride grows 10x, and the
//!   threshold with it. Every decade then gets about `0.9 * 10^precision` values.
//! - `StagedSteps`: the stride grows 10x after the 100th, 1000th and 10000th
//!   emitted value, regardless of magnitude.
//!
//! Both stop before the first `C >= stop_ceiling`; that candidate is discarded.

use crate::domain::{PlannerKind, SweepConfig};

const STAGE_BOUNDARIES: [u64; 3] = [100, 1_000, 10_000];

/// Lazy, finite, strictly increasing sequence of C-values.
#[derive(Debug, Clone)]
pub enum SweepPlan {
    Digits(DigitSteps),
    Staged(StagedSteps),
}

impl SweepPlan {
    pub fn from_config(config: &SweepConfig) -> Self {
        match config.planner {
            PlannerKind::Digits => SweepPlan::Digits(DigitSteps::new(
                config.initial_c_step,
                config.precision_digits,
                config.stop_ceiling,
            )),
            PlannerKind::Staged => {
                SweepPlan::Staged(StagedSteps::new(config.initial_c_step, config.stop_ceiling))
            }
        }
    }
}

impl Iterator for SweepPlan {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match self {
            SweepPlan::Digits(steps) => steps.next(),
            SweepPlan::Staged(steps) => steps.next(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigitSteps {
    c_step: f64,
    ceiling: f64,
    i: u64,
    i_step: u64,
    next_step_increase: u64,
    done: bool,
}

impl DigitSteps {
    pub fn new(c_step: f64, precision_digits: u32, ceiling: f64) -> Self {
        Self {
            c_step,
            ceiling,
            i: 1,
            i_step: 1,
            next_step_increase: 10u64.saturating_pow(precision_digits),
            done: false,
        }
    }
}

impl Iterator for DigitSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }

        let c = self.c_step * self.i as f64;
        if !(c < self.ceiling) {
            self.done = true;
            return None;
        }

        // One more index digit would exceed the precision: shift the stride by a digit.
        if self.i == self.next_step_increase {
            self.i_step = self.i_step.saturating_mul(10);
            self.next_step_increase = self.next_step_increase.saturating_mul(10);
        }

        match self.i.checked_add(self.i_step) {
            Some(i) => self.i = i,
            None => self.done = true,
        }
        Some(c)
    }
}

#[derive(Debug, Clone)]
pub struct StagedSteps {
    c_step: f64,
    ceiling: f64,
    i: u64,
    stride: u64,
    emitted: u64,
    done: bool,
}

impl StagedSteps {
    pub fn new(c_step: f64, ceiling: f64) -> Self {
        Self {
            c_step,
            ceiling,
            i: 1,
            stride: 1,
            emitted: 0,
            done: false,
        }
    }
}

impl Iterator for StagedSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }

        let c = self.c_step * self.i as f64;
        if !(c < self.ceiling) {
            self.done = true;
            return None;
        }

        self.emitted += 1;
        if STAGE_BOUNDARIES.contains(&self.emitted) {
            self.stride = self.stride.saturating_mul(10);
        }

        match self.i.checked_add(self.stride) {
            Some(i) => self.i = i,
            None => self.done = true,
        }
        Some(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_strictly_increasing(values: &[f64]) {
        for w in values.windows(2) {
            assert!(w[0] < w[1], "{} !< {}", w[0], w[1]);
        }
    }

    #[test]
    fn digits_first_decade_uses_initial_step() {
        let values: Vec<f64> = DigitSteps::new(1e-8, 3, 1.0).collect();
        assert_eq!(values[0], 1e-8);
        for (idx, c) in values.iter().take(1_000).enumerate() {
            assert_eq!(*c, 1e-8 * (idx + 1) as f64);
        }
        // 1000th value is i = 1000, then the stride becomes 10.
        assert_eq!(values[1_000], 1e-8 * 1_010.0);
        assert_eq!(values[1_001], 1e-8 * 1_020.0);
    }

    #[test]
    fn digits_keeps_values_per_decade_constant() {
        let values: Vec<f64> = DigitSteps::new(1e-8, 3, 1.0).collect();
        assert_strictly_increasing(&values);
        assert!(values.iter().all(|c| *c > 0.0 && *c < 1.0));

        // i = 1..=1000, then 900 values for each of the decades up to i = 10^8.
        // Whether the last candidate (1e-8 * 1e8) rounds below 1 decides one value.
        let n = values.len();
        assert!(n == 1_000 + 900 * 5 - 1 || n == 1_000 + 900 * 5, "n={n}");

        // The largest emitted C sits within one final stride of the ceiling.
        let last = *values.last().unwrap();
        assert!(last >= 0.99 - 1e-12, "last={last}");
    }

    #[test]
    fn digits_stride_grows_at_each_power_of_ten() {
        let values: Vec<f64> = DigitSteps::new(1.0 / 1e6, 1, 1.0).collect();
        // precision 1: i = 1..10 step 1, 20..100 step 10, 200..1000 step 100, ...
        let indices: Vec<u64> = values.iter().map(|c| (c * 1e6).round() as u64).collect();
        assert_eq!(&indices[..12], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 30]);
        assert_eq!(indices[18], 100);
        assert_eq!(indices[19], 200);
    }

    #[test]
    fn digits_never_emits_ceiling() {
        let values: Vec<f64> = DigitSteps::new(0.1, 1, 1.0).collect();
        assert_eq!(values.len(), 9);
        assert!(values.iter().all(|c| *c < 1.0));

        let values: Vec<f64> = DigitSteps::new(0.25, 3, 1.0).collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn plans_are_restartable() {
        let config = SweepConfig {
            initial_c_step: 1e-4,
            ..SweepConfig::default()
        };
        let a: Vec<f64> = SweepPlan::from_config(&config).collect();
        let b: Vec<f64> = SweepPlan::from_config(&config).collect();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn staged_stride_grows_at_fixed_counts() {
        let values: Vec<f64> = StagedSteps::new(1.0, 1e9).collect();
        let indices: Vec<u64> = values.iter().map(|c| *c as u64).collect();
        assert_eq!(indices[0], 1);
        assert_eq!(indices[99], 100);
        assert_eq!(indices[100], 110);
        assert_eq!(indices[999], 100 + 900 * 10);
        assert_eq!(indices[1_000], 9_100 + 100);
        assert_eq!(indices[10_000] - indices[9_999], 1_000);
        assert_eq!(indices[10_001] - indices[10_000], 1_000);
    }

    #[test]
    fn staged_stops_below_ceiling() {
        let config = crate::domain::Preset::Staged.config();
        let values: Vec<f64> = SweepPlan::from_config(&config).collect();
        assert_eq!(values[0], 1e-6);
        assert_strictly_increasing(&values);
        assert!(values.iter().all(|c| *c < 0.01));
        assert!(*values.last().unwrap() > 0.009);
    }
}
