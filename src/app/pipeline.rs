//! Shared sweep pipeline, callable without the CLI.
//!
//! validate config -> plan C-values -> parallel estimation -> sort -> summary

use crate::domain::{ResultRow, SweepConfig};
use crate::error::AppError;
use crate::report::{SweepSummary, sort_rows, summarize};
use crate::sweep::{CancelToken, SweepPlan, run_sweep};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Rows sorted by ascending C.
    pub rows: Vec<ResultRow>,
    /// Only computed when `info` logging is enabled, since the exact series
    /// is expensive for small C and the summary is only ever logged.
    pub summary: Option<SweepSummary>,
}

/// Execute the full sweep and return the sorted rows.
pub fn run_pipeline(config: &SweepConfig, cancel: &CancelToken) -> Result<RunOutput, AppError> {
    config.validate()?;

    let plan = SweepPlan::from_config(config);
    let rows = sort_rows(run_sweep(plan, config, cancel)?);
    let summary = if tracing::enabled!(tracing::Level::INFO) {
        summarize(&rows)?
    } else {
        None
    };

    Ok(RunOutput { rows, summary })
}
