//! `ev-curves` library crate.
//!
//! The binary (`ev`) is a thin wrapper around this library so that:
//!
//! - the trial, estimator and sweep logic is testable without spawning processes
//! - the sweep can be driven from benches or other tools with a custom config

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod report;
pub mod sim;
pub mod sweep;
