//! Snippet history
//!
//! Most-recently-used list of clipboard snippets. Entries are unique
//! by exact content and capped at a fixed maximum; adding or
//! re-copying an existing entry moves it to the front instead of
//! duplicating it. Every mutation is written through to the store;
//! save failures are logged and the list keeps working in memory.

use crate::store::{FallbackReason, LoadOutcome, Store};

/// Recency-ordered, deduplicated snippet list
pub struct History {
    /// Snippets, most recent first
    entries: Vec<String>,
    /// Hard cap on the list length
    max_items: usize,
    /// Write-through backing store
    store: Store,
}

impl History {
    /// Load history from the store; a missing or bad file yields an
    /// empty list
    pub fn load(store: Store, max_items: usize) -> Self {
        let outcome = store.load();
        if let LoadOutcome::Empty(reason) = &outcome {
            if *reason != FallbackReason::Missing {
                crate::log!("History file fallback: {:?}", reason);
            }
        }
        let mut entries = outcome.into_entries();
        entries.truncate(max_items);

        Self {
            entries,
            max_items,
            store,
        }
    }

    /// Add trimmed text to the front, or move an equal entry there.
    /// Returns false when the trimmed text is empty and nothing changed.
    pub fn add_or_promote(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.entries.retain(|e| e != text);
        self.entries.insert(0, text.to_string());
        self.entries.truncate(self.max_items);
        self.persist();
        true
    }

    /// Move an entry to the front after a successful copy-out
    pub fn promote(&mut self, text: &str) {
        self.entries.retain(|e| e != text);
        self.entries.insert(0, text.to_string());
        self.entries.truncate(self.max_items);
        self.persist();
    }

    /// Delete the entry equal to `text`; a no-op when absent
    pub fn remove(&mut self, text: &str) {
        self.entries.retain(|e| e != text);
        self.persist();
    }

    /// Empty the history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Snippets, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of stored snippets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no snippets
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.entries) {
            crate::log!("Failed to save history: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    fn history_at(dir: &Path, max_items: usize) -> History {
        let store = Store::new(dir.join("history.json"), max_items);
        History::load(store, max_items)
    }

    #[test]
    fn test_fresh_store_is_empty() {
        let dir = tempdir().unwrap();
        let history = history_at(dir.path(), 50);
        assert!(history.is_empty());
    }

    #[test]
    fn test_add_inserts_at_front() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        assert!(history.add_or_promote("x"));
        assert!(history.add_or_promote("y"));
        assert_eq!(history.entries(), ["y", "x"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("x");
        history.add_or_promote("x");
        assert_eq!(history.entries(), ["x"]);
    }

    #[test]
    fn test_add_existing_moves_to_front() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("a");
        history.add_or_promote("b");
        history.add_or_promote("a");
        assert_eq!(history.entries(), ["a", "b"]);
    }

    #[test]
    fn test_add_trims_whitespace() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("  padded  ");
        assert_eq!(history.entries(), ["padded"]);
    }

    #[test]
    fn test_empty_text_never_stored() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        assert!(!history.add_or_promote(""));
        assert!(!history.add_or_promote("   \n\t"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 3);

        for text in ["one", "two", "three", "four"] {
            history.add_or_promote(text);
        }
        assert_eq!(history.entries(), ["four", "three", "two"]);
    }

    #[test]
    fn test_no_duplicates_under_any_sequence() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 10);

        for text in ["a", "b", "a", "c", "b", "a", "a"] {
            history.add_or_promote(text);
        }
        assert_eq!(history.entries(), ["a", "b", "c"]);
        assert!(history.len() <= 10);
    }

    #[test]
    fn test_promote_moves_to_front() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("a");
        history.add_or_promote("b");
        history.promote("a");
        assert_eq!(history.entries(), ["a", "b"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("a");
        history.remove("missing");
        assert_eq!(history.entries(), ["a"]);
    }

    #[test]
    fn test_remove_deletes_entry() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("a");
        history.add_or_promote("b");
        history.remove("a");
        assert_eq!(history.entries(), ["b"]);
    }

    #[test]
    fn test_clear_empties_history() {
        let dir = tempdir().unwrap();
        let mut history = history_at(dir.path(), 50);

        history.add_or_promote("a");
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_mutations_are_written_through() {
        let dir = tempdir().unwrap();

        {
            let mut history = history_at(dir.path(), 50);
            history.add_or_promote("persisted");
        }

        let reloaded = history_at(dir.path(), 50);
        assert_eq!(reloaded.entries(), ["persisted"]);
    }

    #[test]
    fn test_load_caps_oversized_file() {
        let dir = tempdir().unwrap();

        {
            let mut history = history_at(dir.path(), 10);
            for i in 0..5 {
                history.add_or_promote(&format!("entry {}", i));
            }
        }

        let reloaded = history_at(dir.path(), 3);
        assert_eq!(reloaded.len(), 3);
    }
}
