//! Parallel fan-out/fan-in over planned C-values.
//!
//! Each C-value is one rayon task: estimate the EV with a task-local generator,
//! then push the row into a mutex-guarded vector. The vector is the only state
//! shared between tasks. Completion order is arbitrary; callers sort afterwards.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

use crate::domain::{ResultRow, SweepConfig};
use crate::error::{AppError, ErrorKind};
use crate::sim::estimate_ev;

/// Cooperative cancellation flag, checked before each unit starts.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Estimate every planned C-value in parallel and return one row per value.
///
/// The first failing unit aborts the sweep and its error is returned; a
/// successful sweep always has exactly as many rows as the plan had values.
pub fn run_sweep<I>(plan: I, config: &SweepConfig, cancel: &CancelToken) -> Result<Vec<ResultRow>, AppError>
where
    I: IntoIterator<Item = f64>,
{
    let c_values: Vec<f64> = plan.into_iter().collect();
    let total = c_values.len();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|e| AppError::new(ErrorKind::Internal, format!("Failed to build thread pool: {e}")))?;

    tracing::info!(
        units = total,
        samples = config.sample_count,
        threads = pool.current_num_threads(),
        seeded = config.seed.is_some(),
        "starting sweep"
    );
    let started = Instant::now();

    let rows = Mutex::new(Vec::with_capacity(total));
    let completed = AtomicUsize::new(0);
    let report_every = (total / 10).max(1);

    pool.install(|| {
        c_values
            .par_iter()
            .enumerate()
            .try_for_each(|(idx, &c)| -> Result<(), AppError> {
                if cancel.is_cancelled() {
                    return Err(AppError::new(ErrorKind::Cancelled, "Sweep cancelled."));
                }

                let mut rng = unit_rng(config.seed, idx);
                let ev = estimate_ev(c, config.sample_count, &mut rng)?;
                tracing::trace!(c, ev, "unit done");

                rows.lock()
                    .map_err(|_| AppError::new(ErrorKind::Internal, "Result collection lock poisoned."))?
                    .push(ResultRow::new(c, ev));

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % report_every == 0 {
                    tracing::info!(done, total, "sweep progress");
                }
                Ok(())
            })
    })?;

    let rows = rows
        .into_inner()
        .map_err(|_| AppError::new(ErrorKind::Internal, "Result collection lock poisoned."))?;
    if rows.len() != total {
        return Err(AppError::new(
            ErrorKind::Internal,
            format!("Sweep produced {} rows for {total} C-values.", rows.len()),
        ));
    }

    tracing::info!(
        rows = rows.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "sweep complete"
    );
    Ok(rows)
}

/// Generator for the unit at `idx`.
///
/// Seeded sweeps derive one stream per unit from the base seed, so results do
/// not depend on the thread count or on which worker ran the unit.
fn unit_rng(seed: Option<u64>, idx: usize) -> StdRng {
    match seed {
        Some(base) => {
            StdRng::seed_from_u64(base.wrapping_add((idx as u64).wrapping_mul(6_364_136_223_846_793_005)))
        }
        None => StdRng::from_entropy(),
    }
}
