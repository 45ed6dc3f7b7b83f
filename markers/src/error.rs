use std::path::PathBuf;

use crate::types::Category;

pub type Result<T> = std::result::Result<T, MarkerError>;

#[derive(Debug, thiserror::Error)]
pub enum MarkerError {
    /// A historical record could not be read. Deduplication depends on every
    /// record, so this is never skipped.
    #[error("failed to read usage record {}: {source}", path.display())]
    RecordRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("selected marker {name} ({category}) is missing at {}: {source}", path.display())]
    MissingSource {
        category: Category,
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "record directory is locked by {}; remove it if no other run is active",
        path.display()
    )]
    Locked { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}
