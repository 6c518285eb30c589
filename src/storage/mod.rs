//! Storage layer for SmartSave
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The whole ledger lives in a single document.

pub mod file_io;
pub mod ledger;
pub mod snapshot;

pub use file_io::{read_json_value, write_json_atomic};
pub use ledger::LedgerRepository;
pub use snapshot::{merge_value, LedgerSnapshot, MergeMode, MergeReport};

use crate::config::paths::SmartSavePaths;
use crate::error::SmartSaveError;

/// Main storage coordinator
pub struct Storage {
    paths: SmartSavePaths,
    pub ledger: LedgerRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SmartSavePaths) -> Result<Self, SmartSaveError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SmartSavePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<MergeReport, SmartSaveError> {
        self.ledger.load()
    }

    /// Check if a ledger has been saved before
    pub fn is_initialized(&self) -> bool {
        self.paths.has_saved_ledger()
    }
}
