//! Progress Tracking
//!
//! Course completion bookkeeping and finish date projection.

#![warn(missing_docs)]

pub mod tracker;
pub mod estimator;

pub use tracker::{percent_complete, ProgressTracker};
pub use estimator::ScheduleEstimator;
