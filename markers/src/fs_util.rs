use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::types::RunStamp;

const MAX_SUFFIX: u32 = 1000;

/// Create `<prefix>_<stamp>.<ext>` in `dir`, falling back to
/// `<prefix>_<stamp>_<n>.<ext>` when runs share a timestamp. Existing files
/// are never opened for writing.
pub(crate) fn create_unique(
    dir: &Path,
    prefix: &str,
    stamp: &RunStamp,
    ext: &str,
) -> io::Result<(File, PathBuf)> {
    for n in 0..MAX_SUFFIX {
        let name = match n {
            0 => format!("{prefix}_{stamp}.{ext}"),
            n => format!("{prefix}_{stamp}_{n}.{ext}"),
        };
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!("{} exists, trying next suffix", path.display());
            }
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free name for {prefix}_{stamp} in {}", dir.display()),
    ))
}
