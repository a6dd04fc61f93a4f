//! The stochastic process and its estimators.
//!
//! - one trial (`trial`)
//! - Monte Carlo mean over many trials (`estimator`)
//! - exact series value for comparison (`exact`)

pub mod estimator;
pub mod exact;
pub mod trial;

pub use estimator::*;
pub use exact::*;
pub use trial::*;
