//! CSV file storage implementation.
//!
//! The record is kept as a header row plus one data row:
//!
//! ```text
//! end_date,weekly_hours,remaining_courses,max_courses,hours_per_course
//! 2025-12-31,10,20,35,5
//! ```
//!
//! Absent values are written as empty fields. Writes go to a temporary file
//! in the same directory which is then renamed over the target, so readers
//! only ever see a whole record.

use std::path::{Path, PathBuf};

use coursetrack_core::{
    check_hours_per_course, check_weekly_hours, parse_date, CourseConfig, DATE_FORMAT,
    DEFAULT_COURSE_COUNT,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{RecordStore, Result, StorageError};

/// Default file name of the record.
pub const DEFAULT_CONFIG_FILE: &str = "config.csv";

/// On-disk row. Every field is kept as text so each one can be decoded
/// with its own fallback rule.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    end_date: String,
    weekly_hours: String,
    remaining_courses: String,
    max_courses: String,
    // Older files were written without this column.
    #[serde(default)]
    hours_per_course: String,
}

impl From<&CourseConfig> for CsvRow {
    fn from(config: &CourseConfig) -> Self {
        Self {
            end_date: config
                .end_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            weekly_hours: config.weekly_hours.map(|h| h.to_string()).unwrap_or_default(),
            remaining_courses: config.remaining_courses.to_string(),
            max_courses: config.max_courses.to_string(),
            hours_per_course: config.hours_per_course.map(|h| h.to_string()).unwrap_or_default(),
        }
    }
}

impl TryFrom<CsvRow> for CourseConfig {
    type Error = StorageError;

    fn try_from(row: CsvRow) -> Result<Self> {
        let end_date = optional(&row.end_date, "end_date", |s| parse_date(s).ok())?;
        let weekly_hours = optional(&row.weekly_hours, "weekly_hours", |s| {
            s.parse::<u32>().ok()
        })?
        .map(check_weekly_hours)
        .transpose()?;
        let hours_per_course = optional(&row.hours_per_course, "hours_per_course", |s| {
            s.parse::<f64>().ok()
        })?
        .map(check_hours_per_course)
        .transpose()?;

        Ok(CourseConfig {
            end_date,
            weekly_hours,
            max_courses: count_or_default(&row.max_courses),
            remaining_courses: count_or_default(&row.remaining_courses),
            hours_per_course,
        })
    }
}

/// Empty means absent; anything else must parse.
fn optional<T>(raw: &str, field: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse(raw)
        .map(Some)
        .ok_or_else(|| StorageError::Malformed(format!("{field}: {raw:?}")))
}

/// Course counts fall back to the default when empty or unreadable.
fn count_or_default(raw: &str) -> u32 {
    raw.parse().unwrap_or(DEFAULT_COURSE_COUNT)
}

/// File-based CSV storage backend.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    /// Create storage backed by the file at `path`. The file is not touched
    /// until the first load or save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl RecordStore for CsvStorage {
    fn load_record(&self) -> Result<Option<CourseConfig>> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data.as_slice());

        // The last data row wins if a file somehow holds several.
        let mut last = None;
        for row in reader.deserialize::<CsvRow>() {
            last = Some(row?);
        }

        match last {
            Some(row) => {
                let config = CourseConfig::try_from(row)?;
                debug!(path = %self.path.display(), "Loaded course config");
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    fn save_record(&mut self, config: &CourseConfig) -> Result<()> {
        let dir = self.dir();
        std::fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
            writer.serialize(CsvRow::from(config))?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), "Saved course config");
        Ok(())
    }
}
