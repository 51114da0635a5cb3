//! Terminal rendering of the core's structured results.

use std::path::Path;

use coursetrack_core::{CourseConfig, ProgressSnapshot, Projection, ScheduleStatus, DATE_FORMAT};
use coursetrack_storage::LoadOutcome;

/// Display format for projected finish dates.
const DISPLAY_DATE: &str = "%d.%m.%Y";

/// One-line schedule verdict.
pub fn status_line(projection: &Projection) -> String {
    let finish = projection
        .estimated_finish
        .map(|t| t.format(DISPLAY_DATE).to_string())
        .unwrap_or_default();

    match projection.status {
        ScheduleStatus::OnTrack => format!("On track! Projected finish: {finish}"),
        ScheduleStatus::AtRisk => format!("Not on time! Projected finish: {finish}"),
        ScheduleStatus::Incomplete => "Configuration is incomplete.".to_string(),
    }
}

/// Completed/total courses with percentage.
pub fn progress_line(snapshot: &ProgressSnapshot) -> String {
    let counts = format!(
        "{}/{} courses completed",
        snapshot.completed_courses, snapshot.max_courses
    );
    match snapshot.percent_complete {
        Some(pct) => format!("{counts} ({pct:.1}%)"),
        None => format!("{counts} (progress undetermined)"),
    }
}

/// The record, one field per line, absent fields left blank.
pub fn config_lines(config: &CourseConfig) -> Vec<String> {
    fn or_blank<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    vec![
        format!(
            "End date (YYYY-MM-DD): {}",
            or_blank(config.end_date.map(|d| d.format(DATE_FORMAT)))
        ),
        format!("Weekly study hours:    {}", or_blank(config.weekly_hours)),
        format!("Maximum courses:       {}", config.max_courses),
        format!("Remaining courses:     {}", config.remaining_courses),
        format!("Hours per course:      {}", or_blank(config.hours_per_course)),
    ]
}

/// What the user should do before the record is usable, if anything.
///
/// An unreadable file gets its own warning: the values shown are defaults,
/// and the next save replaces the file.
pub fn setup_hint(outcome: LoadOutcome, complete: bool, path: &Path) -> Option<String> {
    match outcome {
        LoadOutcome::Malformed => Some(format!(
            "{} could not be read; the values above are defaults. \
             Completing a course or editing will overwrite the file.",
            path.display()
        )),
        _ if !complete => Some(
            "Configuration is incomplete. Set it with `coursetrack edit --end-date YYYY-MM-DD \
             --weekly-hours N --max-courses N --hours-per-course H`."
                .to_string(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_status_line() {
        let mut projection = Projection {
            status: ScheduleStatus::OnTrack,
            estimated_finish: Some(Utc.with_ymd_and_hms(2025, 3, 12, 9, 30, 0).unwrap()),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31),
        };
        assert_eq!(status_line(&projection), "On track! Projected finish: 12.03.2025");

        projection.status = ScheduleStatus::AtRisk;
        assert_eq!(status_line(&projection), "Not on time! Projected finish: 12.03.2025");

        projection.status = ScheduleStatus::Incomplete;
        assert_eq!(status_line(&projection), "Configuration is incomplete.");
    }

    #[test]
    fn test_progress_line() {
        let snapshot = ProgressSnapshot {
            max_courses: 35,
            completed_courses: 15,
            remaining_courses: 20,
            percent_complete: Some(15.0 / 35.0 * 100.0),
        };
        assert_eq!(progress_line(&snapshot), "15/35 courses completed (42.9%)");

        let snapshot = ProgressSnapshot {
            max_courses: 0,
            completed_courses: 0,
            remaining_courses: 0,
            percent_complete: None,
        };
        assert_eq!(progress_line(&snapshot), "0/0 courses completed (progress undetermined)");
    }

    #[test]
    fn test_config_lines_blank_when_absent() {
        let lines = config_lines(&CourseConfig::default());
        assert_eq!(lines[0], "End date (YYYY-MM-DD): ");
        assert_eq!(lines[2], "Maximum courses:       35");
        assert_eq!(lines[4], "Hours per course:      ");
    }

    #[test]
    fn test_setup_hint() {
        let path = Path::new("config.csv");

        let hint = setup_hint(LoadOutcome::Malformed, false, path).unwrap();
        assert!(hint.starts_with("config.csv could not be read"), "{hint}");

        let hint = setup_hint(LoadOutcome::Missing, false, path).unwrap();
        assert!(hint.starts_with("Configuration is incomplete."), "{hint}");
        assert_eq!(setup_hint(LoadOutcome::Loaded, false, path), Some(hint));

        assert_eq!(setup_hint(LoadOutcome::Loaded, true, path), None);
    }
}
