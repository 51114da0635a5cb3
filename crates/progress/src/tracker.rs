//! Progress tracking service.

use coursetrack_core::{CourseConfig, ProgressSnapshot};
use coursetrack_storage::{ConfigStore, RecordStore, Result};
use tracing::{debug, info};

/// Percentage of the program completed, in [0, 100].
///
/// `None` when it cannot be determined: a program with no courses, or a
/// record claiming more remaining courses than the program has.
pub fn percent_complete(config: &CourseConfig) -> Option<f64> {
    if config.max_courses == 0 || config.remaining_courses > config.max_courses {
        return None;
    }
    let completed = config.max_courses - config.remaining_courses;
    Some(completed as f64 / config.max_courses as f64 * 100.0)
}

/// Marks courses as completed and measures progress.
pub struct ProgressTracker<'a, S: RecordStore> {
    store: &'a mut ConfigStore<S>,
}

impl<'a, S: RecordStore> ProgressTracker<'a, S> {
    /// Create a tracker over `store`.
    pub fn new(store: &'a mut ConfigStore<S>) -> Self {
        Self { store }
    }

    /// Mark one course as completed and save.
    ///
    /// Returns `Ok(false)` without touching anything when no courses remain.
    pub fn complete_course(&mut self) -> Result<bool> {
        if self.store.config().remaining_courses == 0 {
            debug!("No courses remaining, nothing to complete");
            return Ok(false);
        }

        self.store.update(|config| config.remaining_courses -= 1)?;

        let config = self.store.config();
        info!(
            remaining = config.remaining_courses,
            max = config.max_courses,
            "Course completed"
        );
        Ok(true)
    }

    /// Percentage of the program completed.
    pub fn percent_complete(&self) -> Option<f64> {
        percent_complete(self.store.config())
    }

    /// Completed/remaining split of the program.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let config = self.store.config();
        ProgressSnapshot {
            max_courses: config.max_courses,
            completed_courses: config.completed_courses(),
            remaining_courses: config.remaining_courses,
            percent_complete: percent_complete(config),
        }
    }
}
