//! Command-line parsing for the EV sweep.
//!
//! Every flag is optional. Without flags the binary runs the `standard` preset,
//! which is exactly the compiled-in configuration.

use clap::Parser;

use crate::domain::{ColumnOrder, OutputFormat, PlannerKind, Preset};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ev",
    version,
    about = "Expected attempts until success when the success chance grows by C per attempt"
)]
pub struct Cli {
    /// Base configuration; individual flags below override its fields.
    #[arg(long, value_enum, default_value_t = Preset::Standard)]
    pub preset: Preset,

    /// Trials averaged per C-value.
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// First C-value and initial C increment.
    #[arg(long = "c-step")]
    pub c_step: Option<f64>,

    /// Significant index digits kept per decade (digits planner).
    #[arg(long)]
    pub precision: Option<u32>,

    /// Exclusive upper bound on C.
    #[arg(long)]
    pub ceiling: Option<f64>,

    /// C-value planning strategy.
    #[arg(long, value_enum)]
    pub planner: Option<PlannerKind>,

    /// Base random seed (reproducible output). Omit to seed from OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (0 = one per logical CPU).
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Field order on each output line.
    #[arg(long, value_enum, default_value_t = ColumnOrder::CPEv)]
    pub columns: ColumnOrder,

    /// Output line format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Log verbosity on stderr (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: tracing::Level,
}
