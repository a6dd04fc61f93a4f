//! Sweep orchestration.
//!
//! Responsibilities:
//!
//! - plan the C-values to evaluate (`planner`)
//! - estimate each one on a worker pool and collect the rows (`scheduler`)

pub mod planner;
pub mod scheduler;

pub use planner::*;
pub use scheduler::*;
