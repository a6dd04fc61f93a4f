//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - sets up logging on stderr
//! - runs the sweep pipeline
//! - prints the sorted rows on stdout

use clap::Parser;

use crate::cli::Cli;
use crate::domain::SweepConfig;
use crate::error::AppError;
use crate::sweep::CancelToken;

pub mod pipeline;

/// Entry point for the `ev` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = sweep_config_from_args(&cli);
    tracing::debug!(?config, preset = ?cli.preset, "resolved configuration");

    let run = pipeline::run_pipeline(&config, &CancelToken::new())?;

    if let Some(summary) = &run.summary {
        tracing::info!(
            rows = summary.rows,
            c_min = summary.c_min,
            c_max = summary.c_max,
            ev_max = summary.ev_max,
            max_rel_error = summary.max_rel_error,
            worst_c = summary.worst_c,
            "sweep summary"
        );
    }

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    crate::report::render(&mut out, run.rows, cli.columns, cli.format)
}

/// Start from the chosen preset and apply explicit flags on top.
pub fn sweep_config_from_args(cli: &Cli) -> SweepConfig {
    let base = cli.preset.config();
    SweepConfig {
        sample_count: cli.samples.unwrap_or(base.sample_count),
        initial_c_step: cli.c_step.unwrap_or(base.initial_c_step),
        precision_digits: cli.precision.unwrap_or(base.precision_digits),
        stop_ceiling: cli.ceiling.unwrap_or(base.stop_ceiling),
        planner: cli.planner.unwrap_or(base.planner),
        seed: cli.seed.or(base.seed),
        threads: cli.threads,
    }
}
