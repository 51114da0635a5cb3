//! Course configuration model - the single persisted record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default number of courses in a program.
pub const DEFAULT_COURSE_COUNT: u32 = 35;

/// Date format used for the target end date, both on disk and on input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration and progress state of a study program.
///
/// Optional fields are explicitly absent until set. A zero value is still a
/// value: `remaining_courses == 0` means the program is finished, not that
/// the field is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Target completion date
    pub end_date: Option<NaiveDate>,

    /// Study hours available per week
    pub weekly_hours: Option<u32>,

    /// Total courses in the program
    pub max_courses: u32,

    /// Courses not yet completed
    pub remaining_courses: u32,

    /// Estimated effort per course, in hours
    pub hours_per_course: Option<f64>,
}

impl CourseConfig {
    /// Whether every field carries a value.
    ///
    /// `max_courses` and `remaining_courses` always do, so this reduces to
    /// the three optional fields.
    pub fn is_complete(&self) -> bool {
        self.end_date.is_some() && self.weekly_hours.is_some() && self.hours_per_course.is_some()
    }

    /// Number of courses already completed.
    ///
    /// Saturates at zero when `remaining_courses` exceeds `max_courses`,
    /// which a hand-edited record can contain.
    pub fn completed_courses(&self) -> u32 {
        self.max_courses.saturating_sub(self.remaining_courses)
    }
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            end_date: None,
            weekly_hours: None,
            max_courses: DEFAULT_COURSE_COUNT,
            remaining_courses: DEFAULT_COURSE_COUNT,
            hours_per_course: None,
        }
    }
}
