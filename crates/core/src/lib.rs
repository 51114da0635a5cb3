//! Coursetrack core data models.
//!
//! This crate defines the configuration record of a study program and the
//! structured results the progress and schedule services hand back.

#![warn(missing_docs)]

mod config;
mod edit;
mod schedule;

pub use config::{CourseConfig, DATE_FORMAT, DEFAULT_COURSE_COUNT};
pub use edit::{check_hours_per_course, check_weekly_hours, parse_date, EditRequest, ValidationError};
pub use schedule::{ProgressSnapshot, Projection, ScheduleStatus};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
