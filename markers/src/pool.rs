use std::path::Path;

use crate::error::MarkerError;
use crate::error::Result;
use crate::record::is_recordable;

/// Extension shared by every marker in the source pools.
pub const MARKER_EXTENSION: &str = "pdf";

/// Regular files in `dir` whose name ends in `.<extension>`, in the order the
/// filesystem enumerates them. Markers within a category are interchangeable,
/// so no sorting is applied. Names a record file could not hold verbatim are
/// left out, since they could never be excluded from later runs.
pub fn list_candidates(dir: &Path, extension: &str) -> Result<Vec<String>> {
    let list_err = |source| MarkerError::ListDir {
        path: dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{extension}");
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!("skipping non-UTF-8 entry in {}", dir.display());
            continue;
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        // Follows symlinks, so linked PDFs still count as candidates.
        if !entry.path().is_file() {
            continue;
        }
        if !is_recordable(&name) {
            tracing::warn!("skipping {name:?} in {}: name cannot be recorded", dir.display());
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::list_candidates;
    use super::MARKER_EXTENSION;
    use crate::error::MarkerError;

    #[test]
    fn lists_only_matching_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("a.pdf"), b"%PDF")?;
        std::fs::write(dir.path().join("b.PDF"), b"%PDF")?;
        std::fs::write(dir.path().join("notes.txt"), b"")?;
        std::fs::create_dir(dir.path().join("folder.pdf"))?;

        let names = list_candidates(dir.path(), MARKER_EXTENSION)?;
        assert_eq!(names, vec!["a.pdf"]);
        Ok(())
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_candidates(&missing, MARKER_EXTENSION).unwrap_err();
        assert!(matches!(err, MarkerError::ListDir { ref path, .. } if path == &missing));
    }
}
