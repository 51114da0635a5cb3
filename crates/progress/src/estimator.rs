//! Completion date estimation.

use chrono::Duration;
use coursetrack_core::{CourseConfig, Projection, ScheduleStatus, Time};
use tracing::debug;

const MILLIS_PER_WEEK: f64 = 7.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Completion date estimator.
///
/// Stateless: every answer depends only on the record and the `now` passed in.
pub struct ScheduleEstimator;

impl ScheduleEstimator {
    /// Project when the remaining courses will be done at the configured pace.
    ///
    /// `None` when weekly hours or hours per course are missing or not
    /// positive. No remaining courses means the program finishes `now`.
    pub fn estimated_finish(&self, config: &CourseConfig, now: Time) -> Option<Time> {
        let weekly_hours = config.weekly_hours.filter(|h| *h > 0)?;
        let hours_per_course = config
            .hours_per_course
            .filter(|h| h.is_finite() && *h > 0.0)?;

        let total_hours = config.remaining_courses as f64 * hours_per_course;
        let weeks = total_hours / weekly_hours as f64;

        let millis = (weeks * MILLIS_PER_WEEK).round();
        if !millis.is_finite() || millis >= i64::MAX as f64 {
            return None;
        }
        let finish = now.checked_add_signed(Duration::try_milliseconds(millis as i64)?)?;

        debug!(weeks, %finish, "Estimated finish");
        Some(finish)
    }

    /// Compare the projected finish against the target end date.
    ///
    /// Finishing exactly at the start of the end date counts as on track.
    pub fn status(&self, config: &CourseConfig, now: Time) -> Projection {
        let estimated_finish = self.estimated_finish(config, now);
        let deadline = config
            .end_date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());

        let status = match (estimated_finish, deadline) {
            (Some(finish), Some(deadline)) if finish <= deadline => ScheduleStatus::OnTrack,
            (Some(_), Some(_)) => ScheduleStatus::AtRisk,
            _ => ScheduleStatus::Incomplete,
        };

        Projection {
            status,
            estimated_finish,
            end_date: config.end_date,
        }
    }
}

impl Default for ScheduleEstimator {
    fn default() -> Self {
        Self
    }
}
