//! Reporting utilities: ordering, formatting, and the run summary.

pub mod format;

pub use format::*;

use rayon::prelude::*;

use crate::domain::ResultRow;
use crate::error::AppError;
use crate::sim::exact_ev;

/// How a finished sweep compares to the exact expected values.
#[derive(Debug, Clone)]
pub struct SweepSummary {
    pub rows: usize,
    pub c_min: f64,
    pub c_max: f64,
    pub ev_max: f64,
    /// Largest `|ev - exact| / exact` over all rows.
    pub max_rel_error: f64,
    /// C-value where `max_rel_error` occurred.
    pub worst_c: f64,
}

/// Summarize sorted rows. Returns `None` for an empty sweep.
pub fn summarize(rows: &[ResultRow]) -> Result<Option<SweepSummary>, AppError> {
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Ok(None);
    };

    // The exact series is long for tiny C, so spread it over the pool too.
    let errors: Vec<(f64, f64)> = rows
        .par_iter()
        .map(|r| exact_ev(r.c).map(|exact| (r.c, (r.ev - exact).abs() / exact)))
        .collect::<Result<_, _>>()?;

    let (worst_c, max_rel_error) = errors
        .iter()
        .copied()
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((first.c, 0.0));

    let ev_max = rows.iter().map(|r| r.ev).fold(f64::NEG_INFINITY, f64::max);

    Ok(Some(SweepSummary {
        rows: rows.len(),
        c_min: first.c,
        c_max: last.c,
        ev_max,
        max_rel_error,
        worst_c,
    }))
}
