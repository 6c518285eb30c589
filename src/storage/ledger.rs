//! Ledger repository for JSON storage
//!
//! Manages loading and saving the whole ledger to ledger.json

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, info};

use crate::error::{SmartSaveError, SmartSaveResult};
use crate::models::Ledger;

use super::file_io::{read_json_value, write_json_atomic};
use super::snapshot::{merge_value, LedgerSnapshot, MergeMode, MergeReport};

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
}

impl LedgerRepository {
    /// Create a new ledger repository holding an empty ledger
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Ledger::new()),
        }
    }

    /// Where the ledger is saved
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk
    ///
    /// A missing file leaves the in-memory ledger as it is. Fields and entries
    /// that cannot be read are skipped and listed in the returned report.
    ///
    /// # Errors
    ///
    /// `MalformedPersistedState` when the file is not a JSON object. The
    /// in-memory ledger is left untouched in that case.
    pub fn load(&self) -> SmartSaveResult<MergeReport> {
        let Some(value) = read_json_value(&self.path)? else {
            debug!(path = %self.path.display(), "no saved ledger; starting empty");
            return Ok(MergeReport::default());
        };

        let (ledger, report) = merge_value(&Ledger::new(), &value, MergeMode::Lenient)?;
        info!(
            path = %self.path.display(),
            expenses = ledger.expenses().len(),
            goals = ledger.savings_goals().len(),
            skipped = report.skipped.len(),
            "loaded ledger"
        );

        self.replace(ledger)?;
        Ok(report)
    }

    /// Save the ledger to disk
    pub fn save(&self) -> SmartSaveResult<()> {
        let data = self.read_lock()?;
        write_json_atomic(&self.path, &LedgerSnapshot::from(&*data))?;
        debug!(path = %self.path.display(), "saved ledger");
        Ok(())
    }

    /// A copy of the current ledger
    pub fn get(&self) -> SmartSaveResult<Ledger> {
        Ok(self.read_lock()?.clone())
    }

    /// Run `f` against the ledger under the write lock
    ///
    /// Nothing is written to disk; callers decide when to [`save`](Self::save).
    pub fn update<T, F>(&self, f: F) -> SmartSaveResult<T>
    where
        F: FnOnce(&mut Ledger) -> SmartSaveResult<T>,
    {
        let mut data = self.write_lock()?;
        f(&mut data)
    }

    /// Replace the whole in-memory ledger without saving
    pub fn replace(&self, ledger: Ledger) -> SmartSaveResult<()> {
        *self.write_lock()? = ledger;
        Ok(())
    }

    fn read_lock(&self) -> SmartSaveResult<std::sync::RwLockReadGuard<'_, Ledger>> {
        self.data
            .read()
            .map_err(|e| SmartSaveError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> SmartSaveResult<std::sync::RwLockWriteGuard<'_, Ledger>> {
        self.data
            .write()
            .map_err(|e| SmartSaveError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
