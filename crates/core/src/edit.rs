//! Configuration edits and their validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::DATE_FORMAT;

/// Reasons an edit is rejected before it touches the record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A field could not be parsed
    #[error("invalid {field}: {value:?}")]
    Parse {
        /// Field name
        field: &'static str,
        /// Raw input
        value: String,
    },

    /// A numeric field was zero, negative or not finite
    #[error("{field} must be positive")]
    NotPositive {
        /// Field name
        field: &'static str,
    },
}

/// A validated bulk replacement of the editable fields.
///
/// `remaining_courses` is never part of an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRequest {
    /// New target completion date
    pub end_date: NaiveDate,

    /// New weekly study hours
    pub weekly_hours: u32,

    /// New total course count
    pub max_courses: u32,

    /// New hours per course; `None` keeps the current value
    pub hours_per_course: Option<f64>,
}

impl EditRequest {
    /// Build a request from typed values, checking the date format and
    /// that every number is positive.
    pub fn new(
        end_date: &str,
        weekly_hours: u32,
        max_courses: u32,
        hours_per_course: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let end_date = parse_date(end_date)?;

        let weekly_hours = check_weekly_hours(weekly_hours)?;
        if max_courses == 0 {
            return Err(ValidationError::NotPositive { field: "max_courses" });
        }
        let hours_per_course = hours_per_course.map(check_hours_per_course).transpose()?;

        Ok(Self {
            end_date,
            weekly_hours,
            max_courses,
            hours_per_course,
        })
    }

    /// Build a request from raw text, as collected by a form or command line.
    ///
    /// An empty or missing `hours_per_course` keeps the current value.
    pub fn parse(
        end_date: &str,
        weekly_hours: &str,
        max_courses: &str,
        hours_per_course: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let weekly_hours = parse_number::<u32>("weekly_hours", weekly_hours)?;
        let max_courses = parse_number::<u32>("max_courses", max_courses)?;
        let hours_per_course = match hours_per_course.map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_number::<f64>("hours_per_course", raw)?),
        };

        Self::new(end_date, weekly_hours, max_courses, hours_per_course)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ValidationError::Parse {
        field: "end_date",
        value: value.to_string(),
    })
}

/// Weekly study hours must be positive.
pub fn check_weekly_hours(hours: u32) -> Result<u32, ValidationError> {
    if hours == 0 {
        return Err(ValidationError::NotPositive { field: "weekly_hours" });
    }
    Ok(hours)
}

/// Hours per course must be positive and finite.
pub fn check_hours_per_course(hours: f64) -> Result<f64, ValidationError> {
    if !(hours.is_finite() && hours > 0.0) {
        return Err(ValidationError::NotPositive { field: "hours_per_course" });
    }
    Ok(hours)
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::Parse {
        field,
        value: value.to_string(),
    })
}
