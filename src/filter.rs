//! Search filtering
//!
//! Case-insensitive substring match over each entry's full content.
//! Pure function of its inputs; recomputed on every keystroke and
//! every history mutation, never stored.

/// Indices of entries containing the query, history order preserved.
/// An empty or whitespace-only query matches everything.
pub fn recompute(entries: &[String], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..entries.len()).collect();
    }

    let query_lower = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}
