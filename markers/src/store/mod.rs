use std::path::PathBuf;

use crate::error::Result;
use crate::types::RunStamp;
use crate::types::Selection;
use crate::types::UsedSet;

/// Persistence for the used-set: historical records in, one new record out.
pub trait UsageStore {
    /// Union of every filename in every historical record.
    fn load_used(&self) -> Result<UsedSet>;
    /// Write a new record for `selection`; never overwrites an existing one.
    fn record(&self, selection: &Selection, stamp: &RunStamp) -> Result<PathBuf>;
    /// Paths of all historical records.
    fn records(&self) -> Result<Vec<PathBuf>>;
    /// Exclusive guard held for the duration of a run.
    fn lock(&self) -> Result<RecordLock>;
}

/// Lock file removed when the guard is dropped.
#[derive(Debug)]
pub struct RecordLock {
    path: PathBuf,
}

impl RecordLock {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for RecordLock {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::debug!("failed to release lock {}: {e}", self.path.display());
        }
    }
}

pub mod dir;
