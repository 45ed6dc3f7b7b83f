use std::path::PathBuf;

use crate::error::Result;
use crate::pool;
use crate::types::Category;
use crate::types::Counts;
use crate::types::Selection;
use crate::types::Shortfall;
use crate::types::UsedSet;

/// Take the first `count` candidates that are not in `used`, keeping the
/// candidates' order. Reports a shortfall when fewer than `count` remain.
pub fn select_from(
    category: Category,
    count: u32,
    candidates: Vec<String>,
    used: &UsedSet,
) -> (Vec<String>, Option<Shortfall>) {
    if count == 0 {
        return (Vec::new(), None);
    }
    let wanted = count as usize;
    let picked: Vec<String> = candidates
        .into_iter()
        .filter(|name| !used.contains(name))
        .take(wanted)
        .collect();
    let shortfall = (picked.len() < wanted).then(|| Shortfall {
        category,
        requested: count,
        found: picked.len(),
    });
    (picked, shortfall)
}

/// Run the selector over every category. `source_dir` maps a category to its
/// pool directory; directories of categories with a zero count are never read.
pub fn select<F>(source_dir: F, counts: &Counts, used: &UsedSet) -> Result<Selection>
where
    F: Fn(Category) -> PathBuf,
{
    let mut selection = Selection::new();
    for category in Category::ALL {
        let count = counts.get(category);
        if count == 0 {
            continue;
        }
        let dir = source_dir(category);
        let candidates = pool::list_candidates(&dir, pool::MARKER_EXTENSION)?;
        tracing::debug!(
            "{category}: {} candidates in {}",
            candidates.len(),
            dir.display()
        );
        let (picked, shortfall) = select_from(category, count, candidates, used);
        if let Some(shortfall) = shortfall {
            tracing::warn!("{shortfall}");
            selection.shortfalls.push(shortfall);
        }
        selection.set(category, picked);
    }
    Ok(selection)
}
