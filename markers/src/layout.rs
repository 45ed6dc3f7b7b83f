use std::path::Path;
use std::path::PathBuf;

use crate::store::UsageStore;
use crate::store::dir::DirUsageStore;
use crate::types::Category;

/// Sub-path under the root holding one directory per marker size.
pub const POOL_SUBDIR: &str = "apriltags/tagStandard41h12/pdf";

/// Filesystem locations used by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Directory containing the marker pools.
    pub root: PathBuf,
    /// Directory of historical record files.
    pub used_dir: PathBuf,
    /// Directory receiving the archive.
    pub out_dir: PathBuf,
}

impl Layout {
    /// Defaults relative to `cwd`: pools under `<cwd>/apriltags/...`, records
    /// in `<cwd>/used`, archive in `<cwd>`.
    pub fn new(cwd: &Path) -> Self {
        Self {
            root: cwd.to_path_buf(),
            used_dir: cwd.join("used"),
            out_dir: cwd.to_path_buf(),
        }
    }

    /// Defaults relative to `cwd`, overridden via env:
    /// - `TAGPICK_ROOT` for the pool root
    /// - `TAGPICK_USED_DIR` for the record directory
    /// - `TAGPICK_OUT_DIR` for the archive directory
    pub fn from_env(cwd: &Path) -> Self {
        let mut layout = Self::new(cwd);
        if let Some(root) = env_path("TAGPICK_ROOT") {
            layout.root = root;
        }
        if let Some(used_dir) = env_path("TAGPICK_USED_DIR") {
            layout.used_dir = used_dir;
        }
        if let Some(out_dir) = env_path("TAGPICK_OUT_DIR") {
            layout.out_dir = out_dir;
        }
        layout
    }

    pub fn source_dir(&self, category: Category) -> PathBuf {
        self.root.join(POOL_SUBDIR).join(category.dir_name())
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build the record store for a layout.
pub fn open_usage_store(layout: &Layout) -> Box<dyn UsageStore> {
    Box::new(DirUsageStore::new(&layout.used_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_live_under_the_root() {
        let layout = Layout::new(Path::new("/work"));
        assert_eq!(
            layout.source_dir(Category::Small),
            Path::new("/work/apriltags/tagStandard41h12/pdf/90mm")
        );
        assert_eq!(layout.used_dir, Path::new("/work/used"));
        assert_eq!(layout.out_dir, Path::new("/work"));
    }
}
