//! Free-text search from the navigation bar.

use adspace_catalog_models::PlacementRecord;

/// Records whose name or location contains `query`, ignoring case.
/// A blank query matches everything. Order is preserved.
pub fn search<'a>(
    records: impl IntoIterator<Item = &'a PlacementRecord>,
    query: &str,
) -> Vec<&'a PlacementRecord> {
    let needle = query.trim().to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.location.to_lowercase().contains(&needle)
        })
        .collect()
}
