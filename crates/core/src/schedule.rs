//! Schedule projection and progress results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Time;

/// Schedule health relative to the target end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduleStatus {
    /// Projected finish is on or before the end date
    OnTrack,
    /// Projected finish is after the end date
    AtRisk,
    /// Not enough configuration to project a finish date
    Incomplete,
}

/// Result of evaluating the schedule at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Schedule status
    pub status: ScheduleStatus,

    /// Projected finish, when determinable
    pub estimated_finish: Option<Time>,

    /// Target end date, when set
    pub end_date: Option<NaiveDate>,
}

/// Completed/remaining split of the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Total courses
    pub max_courses: u32,

    /// Courses completed so far
    pub completed_courses: u32,

    /// Courses left
    pub remaining_courses: u32,

    /// Percentage complete (0-100), `None` when undetermined
    pub percent_complete: Option<f64>,
}
