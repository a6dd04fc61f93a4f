//! Shared domain types.
//!
//! These types are intentionally small and copyable so they can be:
//!
//! - handed to worker threads without sharing
//! - rendered as CSV or JSON lines
//! - compared in tests without any setup

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Trials averaged per C-value. Smaller is faster, larger is a better estimate.
pub const EV_SAMPLES: usize = 200;

/// Significant index digits kept per decade of C.
pub const PRECISION_DIGITS: u32 = 3;

/// First C-value of the sweep, and the initial increment between C-values.
///
/// The work per trial grows like `1/sqrt(C)`, so sweeps starting below ~1e-07
/// get noticeably slower.
pub const INITIAL_C_STEP: f64 = 1e-08;

/// Exclusive upper bound on planned C-values.
pub const STOP_CEILING: f64 = 1.0;

const MIN_C_STEP: f64 = 1e-15;
const MAX_PRECISION_DIGITS: u32 = 6;

/// One row of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Probability growth rate.
    pub c: f64,
    /// Implied success probability, `1 / ev`.
    pub p: f64,
    /// Mean attempts until success.
    pub ev: f64,
}

impl ResultRow {
    pub fn new(c: f64, ev: f64) -> Self {
        Self { c, p: 1.0 / ev, ev }
    }
}

/// Strategy used to pick C-values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlannerKind {
    /// Keep `precision_digits` significant index digits per decade.
    Digits,
    /// Linear steps whose stride grows 10x after the 100th, 1000th and 10000th value.
    Staged,
}

/// Named sweep configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 200 samples from 1e-08 to 1, three digits per decade.
    Standard,
    /// 100 samples from 1e-10 to 1.
    Deep,
    /// 100000 samples from 1e-06 to 1, two digits per decade.
    Dense,
    /// 1000 samples from 1e-06 up to 0.01 with staged linear steps.
    Staged,
}

impl Preset {
    pub fn config(self) -> SweepConfig {
        let base = SweepConfig::default();
        match self {
            Preset::Standard => base,
            Preset::Deep => SweepConfig {
                sample_count: 100,
                initial_c_step: 1e-10,
                ..base
            },
            Preset::Dense => SweepConfig {
                sample_count: 100_000,
                initial_c_step: 1e-06,
                precision_digits: 2,
                ..base
            },
            Preset::Staged => SweepConfig {
                sample_count: 1_000,
                initial_c_step: 1e-06,
                stop_ceiling: 0.01,
                planner: PlannerKind::Staged,
                ..base
            },
        }
    }
}

/// Order of the fields on each output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColumnOrder {
    #[value(name = "c-p-ev")]
    CPEv,
    #[value(name = "p-c-ev")]
    PCEv,
}

/// Line format on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma-separated, no header.
    Csv,
    /// One JSON object per line.
    Json,
}

/// A full sweep configuration as understood by the pipeline.
///
/// `Default` reproduces the compiled-in constants; presets and CLI flags
/// override individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub sample_count: usize,
    pub initial_c_step: f64,
    pub precision_digits: u32,
    pub stop_ceiling: f64,
    pub planner: PlannerKind,
    /// Base seed for per-unit generators. `None` seeds every unit from OS entropy.
    pub seed: Option<u64>,
    /// Worker threads (0 = one per logical CPU).
    pub threads: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sample_count: EV_SAMPLES,
            initial_c_step: INITIAL_C_STEP,
            precision_digits: PRECISION_DIGITS,
            stop_ceiling: STOP_CEILING,
            planner: PlannerKind::Digits,
            seed: None,
            threads: 0,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.sample_count == 0 {
            return Err(AppError::invalid_config("Sample count must be > 0."));
        }
        if !(self.stop_ceiling.is_finite() && self.stop_ceiling > 0.0 && self.stop_ceiling <= 1.0) {
            return Err(AppError::invalid_config(format!(
                "Invalid stop ceiling {} (must be in (0, 1]).",
                self.stop_ceiling
            )));
        }
        if !(self.initial_c_step.is_finite()
            && self.initial_c_step >= MIN_C_STEP
            && self.initial_c_step < self.stop_ceiling)
        {
            return Err(AppError::invalid_config(format!(
                "Invalid C step {} (must be in [{MIN_C_STEP}, {})).",
                self.initial_c_step, self.stop_ceiling
            )));
        }
        if !(1..=MAX_PRECISION_DIGITS).contains(&self.precision_digits) {
            return Err(AppError::invalid_config(format!(
                "Precision must be between 1 and {MAX_PRECISION_DIGITS} (got {}).",
                self.precision_digits
            )));
        }
        Ok(())
    }
}
