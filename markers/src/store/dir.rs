use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use super::*;
use crate::error::MarkerError;
use crate::fs_util::create_unique;
use crate::record::parse_record;
use crate::record::render_record;

pub const RECORD_PREFIX: &str = "used";
pub const RECORD_EXTENSION: &str = "txt";
pub const LOCK_FILE: &str = ".tagpick.lock";

/// Record files kept as plain text in a single directory.
#[derive(Debug, Clone)]
pub struct DirUsageStore {
    dir: PathBuf,
}

impl DirUsageStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Regular, non-hidden files in the record directory. A missing directory
    /// has no records.
    fn record_paths(&self) -> Result<Vec<PathBuf>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no record directory at {}", self.dir.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(MarkerError::ListDir {
                    path: self.dir.clone(),
                    source,
                });
            }
        };
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| MarkerError::ListDir {
                path: self.dir.clone(),
                source,
            })?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            if !path.is_file() {
                tracing::debug!("skipping {} in record directory", path.display());
                continue;
            }
            paths.push(path);
        }
        paths.sort();
        Ok(paths)
    }
}

impl UsageStore for DirUsageStore {
    fn load_used(&self) -> Result<UsedSet> {
        let mut used = UsedSet::new();
        for path in self.record_paths()? {
            let contents = std::fs::read_to_string(&path)
                .map_err(|source| MarkerError::RecordRead { path: path.clone(), source })?;
            used.extend(parse_record(&contents));
        }
        tracing::debug!("loaded {} used markers from {}", used.len(), self.dir.display());
        Ok(used)
    }

    fn record(&self, selection: &Selection, stamp: &RunStamp) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let (mut file, path) =
            create_unique(&self.dir, RECORD_PREFIX, stamp, RECORD_EXTENSION)?;
        file.write_all(render_record(selection).as_bytes())?;
        file.sync_all()?;
        tracing::info!("recorded {} markers in {}", selection.total(), path.display());
        Ok(path)
    }

    fn records(&self) -> Result<Vec<PathBuf>> {
        self.record_paths()
    }

    fn lock(&self) -> Result<RecordLock> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(LOCK_FILE);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                // Guard first, so a failed write still removes the lock file.
                let lock = RecordLock::new(path);
                writeln!(file, "{}", std::process::id())?;
                Ok(lock)
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(MarkerError::Locked { path })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn lock_is_exclusive_until_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirUsageStore::new(dir.path());

        let guard = store.lock().unwrap();
        let pid = std::fs::read_to_string(guard.path()).unwrap();
        assert_eq!(pid.trim(), std::process::id().to_string());
        assert!(matches!(store.lock(), Err(MarkerError::Locked { .. })));
        drop(guard);
        assert!(!dir.path().join(LOCK_FILE).exists());
        assert!(store.lock().is_ok());
    }

    #[test]
    fn lock_file_is_not_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirUsageStore::new(dir.path());
        let _guard = store.lock().unwrap();

        assert!(store.records().unwrap().is_empty());
        assert!(store.load_used().unwrap().is_empty());
    }

    #[test]
    fn record_then_load_round_trips_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirUsageStore::new(dir.path().join("used"));
        let mut selection = Selection::new();
        selection.set(Category::Medium, vec!["m.pdf".into()]);

        let path = store
            .record(&selection, &RunStamp::from("2024_01_01_00_00_00"))
            .unwrap();

        assert_eq!(store.records().unwrap(), vec![path]);
        let used = store.load_used().unwrap();
        assert_eq!(used.len(), 1);
        assert!(used.contains("m.pdf"));
    }
}
