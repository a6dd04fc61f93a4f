//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the compiled-in sweep constants and `SweepConfig`
//! - CLI-facing enums (`Preset`, `PlannerKind`, `ColumnOrder`, `OutputFormat`)
//! - the output row (`ResultRow`)

pub mod types;

pub use types::*;
