//! In-memory storage, for tests and embedding.

use coursetrack_core::CourseConfig;

use super::{RecordStore, Result};

/// Record store that keeps the record in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    record: Option<CourseConfig>,
    saves: usize,
}

impl MemoryStore {
    /// Create a store that already holds a record.
    pub fn with_record(config: CourseConfig) -> Self {
        Self {
            record: Some(config),
            saves: 0,
        }
    }

    /// The record as last saved.
    pub fn record(&self) -> Option<&CourseConfig> {
        self.record.as_ref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load_record(&self) -> Result<Option<CourseConfig>> {
        Ok(self.record.clone())
    }

    fn save_record(&mut self, config: &CourseConfig) -> Result<()> {
        self.record = Some(config.clone());
        self.saves += 1;
        Ok(())
    }
}
