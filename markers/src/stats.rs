use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use crate::error::MarkerError;
use crate::error::Result;
use crate::layout::Layout;
use crate::layout::open_usage_store;
use crate::pool;
use crate::types::Category;

/// Pool sizes and usage per category. A missing pool directory counts as
/// empty; an unreadable record still fails.
pub fn stats(layout: &Layout) -> Result<Value> {
    let store = open_usage_store(layout);
    let records = store.records()?;
    let used = store.load_used()?;

    let mut by_category = Map::new();
    for category in Category::ALL {
        let dir = layout.source_dir(category);
        let candidates = match pool::list_candidates(&dir, pool::MARKER_EXTENSION) {
            Ok(names) => names,
            Err(MarkerError::ListDir { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!("no pool at {}", dir.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        let used_here = candidates.iter().filter(|n| used.contains(n)).count();
        by_category.insert(
            category.key().to_string(),
            json!({
                "total": candidates.len(),
                "used": used_here,
                "available": candidates.len() - used_here,
            }),
        );
    }

    Ok(json!({
        "records": records.len(),
        "used": used.len(),
        "by_category": by_category,
    }))
}
