use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use zip::CompressionMethod;
use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::MarkerError;
use crate::error::Result;
use crate::fs_util::create_unique;
use crate::types::Category;
use crate::types::RunStamp;
use crate::types::Selection;

pub const ARCHIVE_PREFIX: &str = "selected_markers";
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Entry name of a marker inside the archive.
pub fn entry_name(category: Category, name: &str) -> String {
    format!("{}/{name}", category.key())
}

/// Pack every selected marker into a new zip in `out_dir`, one folder per
/// category. Every source is opened before the archive is created, so a
/// marker that has vanished from its pool aborts the run without leaving an
/// archive behind.
pub fn write_archive<F>(
    out_dir: &Path,
    stamp: &RunStamp,
    selection: &Selection,
    source_dir: F,
) -> Result<PathBuf>
where
    F: Fn(Category) -> PathBuf,
{
    let mut sources = Vec::with_capacity(selection.total());
    for (category, names) in selection.iter() {
        let dir = source_dir(category);
        for name in names {
            let src_path = dir.join(name);
            let src = File::open(&src_path).map_err(|source| MarkerError::MissingSource {
                category,
                name: name.clone(),
                path: src_path.clone(),
                source,
            })?;
            sources.push((entry_name(category, name), src));
        }
    }

    std::fs::create_dir_all(out_dir)?;
    let (file, path) = create_unique(out_dir, ARCHIVE_PREFIX, stamp, ARCHIVE_EXTENSION)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (entry, mut src) in sources {
        zip.start_file(entry, options)?;
        std::io::copy(&mut src, &mut zip)?;
    }
    zip.finish()?.flush()?;
    tracing::info!("archived {} markers in {}", selection.total(), path.display());
    Ok(path)
}

/// Entry names stored in an archive.
pub fn read_archive_entries(path: &Path) -> Result<Vec<String>> {
    let archive = ZipArchive::new(File::open(path)?)?;
    Ok(archive.file_names().map(str::to_string).collect())
}
