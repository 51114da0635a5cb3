//! Storage abstraction and the configuration store for coursetrack.
//!
//! This crate provides a trait-based record storage interface with a CSV
//! file implementation, and the [`ConfigStore`] that owns the course record.

#![warn(missing_docs)]

pub mod trait_;
pub mod csv_storage;
pub mod memory;
pub mod config_store;

pub use trait_::{RecordStore, StorageError, Result};
pub use csv_storage::{CsvStorage, DEFAULT_CONFIG_FILE};
pub use memory::MemoryStore;
pub use config_store::{ConfigStore, EditError, LoadOutcome};
