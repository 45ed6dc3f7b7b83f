use std::path::PathBuf;

use crate::archive::write_archive;
use crate::error::Result;
use crate::layout::Layout;
use crate::layout::open_usage_store;
use crate::select::select;
use crate::types::Counts;
use crate::types::RunStamp;
use crate::types::Selection;

/// Outcome of one selection run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub selection: Selection,
    pub record_path: PathBuf,
    pub archive_path: PathBuf,
}

/// Load the used-set, select, record, then archive, holding the record
/// directory lock throughout.
pub fn run(layout: &Layout, counts: &Counts, stamp: &RunStamp) -> Result<RunReport> {
    let store = open_usage_store(layout);
    let _lock = store.lock()?;

    let used = store.load_used()?;
    let selection = select(|c| layout.source_dir(c), counts, &used)?;
    let record_path = store.record(&selection, stamp)?;
    let archive_path = write_archive(&layout.out_dir, stamp, &selection, |c| {
        layout.source_dir(c)
    })?;

    Ok(RunReport {
        selection,
        record_path,
        archive_path,
    })
}
