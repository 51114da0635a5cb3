//! Configuration store - owns the course record and its persistence.

use coursetrack_core::{CourseConfig, EditRequest, ValidationError};
use tracing::{debug, info, warn};

use super::{RecordStore, Result, StorageError};

/// What the last [`ConfigStore::load`] found in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A record was read
    Loaded,
    /// Nothing stored yet
    Missing,
    /// A record exists but could not be read
    Malformed,
}

/// Errors returned by [`ConfigStore::edit`].
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// Input rejected before any change was made
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The edited record could not be saved; the previous record is kept
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Holds the course configuration in memory and writes it through to a
/// [`RecordStore`].
///
/// Loading never fails: a missing or unreadable record is replaced by the
/// defaults, and callers find out through [`ConfigStore::is_complete`] or
/// [`ConfigStore::load_outcome`].
pub struct ConfigStore<S: RecordStore> {
    backend: S,
    config: CourseConfig,
    outcome: LoadOutcome,
}

impl<S: RecordStore> ConfigStore<S> {
    /// Create a store over `backend` and load the record from it.
    pub fn open(backend: S) -> Self {
        let mut store = Self {
            backend,
            config: CourseConfig::default(),
            outcome: LoadOutcome::Missing,
        };
        store.load();
        store
    }

    /// Reload the record from the backend, falling back to defaults.
    pub fn load(&mut self) -> LoadOutcome {
        let (config, outcome) = match self.backend.load_record() {
            Ok(Some(config)) => (config, LoadOutcome::Loaded),
            Ok(None) => {
                warn!("Course configuration not found, using defaults");
                (CourseConfig::default(), LoadOutcome::Missing)
            }
            Err(e) => {
                warn!(error = %e, "Course configuration unreadable, using defaults");
                (CourseConfig::default(), LoadOutcome::Malformed)
            }
        };

        debug!(?config, ?outcome, "Course configuration loaded");
        self.config = config;
        self.outcome = outcome;
        outcome
    }

    /// Write the full in-memory record to the backend.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save_record(&self.config)
    }

    /// Apply `f` to the record and save it.
    ///
    /// If the save fails the record is restored to what it was before `f`
    /// ran, so memory and storage never diverge.
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut CourseConfig),
    {
        let previous = self.config.clone();
        f(&mut self.config);

        if let Err(e) = self.save() {
            self.config = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Replace end date, weekly hours and course count, and the hours per
    /// course when given, then save.
    ///
    /// `end_date` must be `YYYY-MM-DD`. The record is left untouched when
    /// validation or the save fails. `remaining_courses` is never changed.
    pub fn edit(
        &mut self,
        end_date: &str,
        weekly_hours: u32,
        max_courses: u32,
        hours_per_course: Option<f64>,
    ) -> std::result::Result<(), EditError> {
        let request = EditRequest::new(end_date, weekly_hours, max_courses, hours_per_course)?;
        self.edit_request(request)
    }

    /// Apply an already validated edit.
    pub fn edit_request(&mut self, request: EditRequest) -> std::result::Result<(), EditError> {
        self.update(|config| {
            config.end_date = Some(request.end_date);
            config.weekly_hours = Some(request.weekly_hours);
            config.max_courses = request.max_courses;
            if let Some(hours) = request.hours_per_course {
                config.hours_per_course = Some(hours);
            }
        })?;

        info!(
            end_date = %request.end_date,
            weekly_hours = request.weekly_hours,
            max_courses = request.max_courses,
            "Course configuration updated"
        );
        Ok(())
    }

    /// Whether every field of the record is set.
    pub fn is_complete(&self) -> bool {
        self.config.is_complete()
    }

    /// The current record.
    pub fn config(&self) -> &CourseConfig {
        &self.config
    }

    /// Result of the most recent load.
    pub fn load_outcome(&self) -> LoadOutcome {
        self.outcome
    }

    /// The storage backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CsvStorage, MemoryStore};
    use chrono::NaiveDate;

    /// Backend whose saves always fail.
    struct FailingStore {
        record: Option<CourseConfig>,
    }

    impl RecordStore for FailingStore {
        fn load_record(&self) -> Result<Option<CourseConfig>> {
            Ok(self.record.clone())
        }

        fn save_record(&mut self, _config: &CourseConfig) -> Result<()> {
            Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    /// Backend that cannot read its record.
    struct BrokenStore;

    impl RecordStore for BrokenStore {
        fn load_record(&self) -> Result<Option<CourseConfig>> {
            Err(StorageError::Malformed("weekly_hours: \"x\"".to_string()))
        }

        fn save_record(&mut self, _config: &CourseConfig) -> Result<()> {
            Ok(())
        }
    }

    fn sample() -> CourseConfig {
        CourseConfig {
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31),
            weekly_hours: Some(10),
            max_courses: 35,
            remaining_courses: 20,
            hours_per_course: Some(5.0),
        }
    }

    #[test]
    fn test_fresh_store_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::open(CsvStorage::new(dir.path().join("config.csv")));

        assert!(!store.is_complete());
        assert_eq!(store.load_outcome(), LoadOutcome::Missing);
        assert_eq!(store.config().remaining_courses, 35);
        assert_eq!(store.config().max_courses, 35);
        assert!(store.config().end_date.is_none());
    }

    #[test]
    fn test_malformed_record_uses_defaults() {
        let store = ConfigStore::open(BrokenStore);
        assert_eq!(store.load_outcome(), LoadOutcome::Malformed);
        assert_eq!(store.config(), &CourseConfig::default());
        assert!(!store.is_complete());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.csv");
        std::fs::write(&path, "this is not,a config\n\"unterminated\n").unwrap();

        let store = ConfigStore::open(CsvStorage::new(&path));
        assert_eq!(store.load_outcome(), LoadOutcome::Malformed);
        assert_eq!(store.config(), &CourseConfig::default());
    }

    #[test]
    fn test_out_of_range_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.csv");
        std::fs::write(
            &path,
            "end_date,weekly_hours,remaining_courses,max_courses,hours_per_course\n2025-12-31,0,20,35,-5\n",
        )
        .unwrap();

        let store = ConfigStore::open(CsvStorage::new(&path));
        assert_eq!(store.load_outcome(), LoadOutcome::Malformed);
        assert!(!store.is_complete());
        assert_eq!(store.config(), &CourseConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.csv");

        let mut store = ConfigStore::open(CsvStorage::new(&path));
        store.edit("2025-12-31", 10, 35, Some(5.0)).unwrap();
        store.update(|c| c.remaining_courses = 20).unwrap();
        let written = std::fs::read(&path).unwrap();

        let reopened = ConfigStore::open(CsvStorage::new(&path));
        assert_eq!(reopened.load_outcome(), LoadOutcome::Loaded);
        assert_eq!(reopened.config(), &sample());
        assert!(reopened.is_complete());

        let mut reopened = reopened;
        reopened.save().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), written);
    }

    #[test]
    fn test_edit_replaces_fields() {
        let mut store = ConfigStore::open(MemoryStore::with_record(sample()));
        store.edit("2026-06-30", 12, 40, None).unwrap();

        let config = store.config();
        assert_eq!(config.end_date, NaiveDate::from_ymd_opt(2026, 6, 30));
        assert_eq!(config.weekly_hours, Some(12));
        assert_eq!(config.max_courses, 40);
        // Preserved when not given
        assert_eq!(config.hours_per_course, Some(5.0));
        // Never touched by an edit
        assert_eq!(config.remaining_courses, 20);

        assert_eq!(store.backend().record(), Some(config));
        assert_eq!(store.backend().saves(), 1);
    }

    #[test]
    fn test_edit_lowering_max_keeps_remaining() {
        let mut store = ConfigStore::open(MemoryStore::with_record(sample()));
        store.edit("2025-12-31", 10, 10, None).unwrap();
        assert_eq!(store.config().max_courses, 10);
        assert_eq!(store.config().remaining_courses, 20);
    }

    #[test]
    fn test_edit_invalid_date_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.csv");
        let mut store = ConfigStore::open(CsvStorage::new(&path));
        store.edit("2025-12-31", 10, 35, Some(5.0)).unwrap();
        let before_disk = std::fs::read(&path).unwrap();
        let before = store.config().clone();

        let err = store.edit("12/31/2025", 99, 99, Some(1.0)).unwrap_err();
        assert!(matches!(err, EditError::Invalid(ValidationError::Parse { .. })));
        assert_eq!(store.config(), &before);
        assert_eq!(std::fs::read(&path).unwrap(), before_disk);
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let mut store = ConfigStore::open(FailingStore {
            record: Some(sample()),
        });

        let err = store.edit("2030-01-01", 1, 1, Some(1.0)).unwrap_err();
        assert!(matches!(err, EditError::Storage(_)));
        assert_eq!(store.config(), &sample());

        assert!(store.update(|c| c.remaining_courses = 0).is_err());
        assert_eq!(store.config().remaining_courses, 20);
    }

    #[test]
    fn test_zero_remaining_is_still_complete() {
        let mut config = sample();
        config.remaining_courses = 0;
        let store = ConfigStore::open(MemoryStore::with_record(config));
        assert!(store.is_complete());
    }

    #[test]
    fn test_reload_replaces_in_memory_state() {
        let mut store = ConfigStore::open(MemoryStore::with_record(sample()));
        assert_eq!(store.load(), LoadOutcome::Loaded);
        assert_eq!(store.config(), &sample());
    }
}
