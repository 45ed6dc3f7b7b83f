//! Selection and bookkeeping for printable AprilTag marker PDFs.
//!
//! A run loads the filenames consumed by earlier runs, picks unused markers
//! from the three size pools, records the picks in a new record file and
//! packs the chosen PDFs into a zip archive.

pub mod archive;
pub mod error;
mod fs_util;
pub mod layout;
pub mod pool;
pub mod record;
pub mod run;
pub mod select;
pub mod stats;
pub mod store;
pub mod types;

pub use error::MarkerError;
pub use error::Result;
