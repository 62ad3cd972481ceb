//! Interaction controller
//!
//! Translates user commands into history mutations and keeps the
//! filtered view and selection in sync. Owns no widgets: the
//! interactive surface feeds it commands and renders its state, so the
//! whole state machine runs (and tests) without a presentation layer.

use std::fmt;

use crate::clipboard::Clipboard;
use crate::filter;
use crate::history::History;

/// A user action, decoupled from any widget wiring
#[derive(Clone, Debug)]
pub enum Command {
    /// Capture the current system clipboard text into the history
    AddClipboard,
    /// Copy the selected entry back to the system clipboard
    CopySelected,
    /// Delete the selected entry
    DeleteSelected,
    /// Empty the whole history (confirmation happens upstream)
    ClearAll,
    /// The search text changed
    Search(String),
    /// Move the selection up
    SelectUp,
    /// Move the selection down
    SelectDown,
}

/// Latest user-visible outcome of a command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Ready,
    Added,
    Copied,
    Deleted,
    Cleared,
    ClipboardEmpty,
    NoClipboardText,
    NoSelection,
    NoSelectionToDelete,
    CopyFailed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready"),
            Status::Added => write!(f, "Added clipboard item."),
            Status::Copied => write!(f, "Copied to clipboard."),
            Status::Deleted => write!(f, "Deleted item."),
            Status::Cleared => write!(f, "Cleared all items."),
            Status::ClipboardEmpty => write!(f, "Clipboard empty."),
            Status::NoClipboardText => write!(f, "No text in clipboard."),
            Status::NoSelection => write!(f, "No selection."),
            Status::NoSelectionToDelete => write!(f, "No selection to delete."),
            Status::CopyFailed(reason) => write!(f, "Copy failed: {}", reason),
        }
    }
}

/// State machine driving the history from user commands
pub struct Controller<C: Clipboard> {
    history: History,
    clipboard: C,
    /// Current search text
    query: String,
    /// Indices into the history, in display order
    filtered: Vec<usize>,
    /// Index into `filtered`, when an entry is selected
    selected: Option<usize>,
    status: Status,
}

impl<C: Clipboard> Controller<C> {
    /// Create a controller over a loaded history
    pub fn new(history: History, clipboard: C) -> Self {
        let filtered = filter::recompute(history.entries(), "");
        Self {
            history,
            clipboard,
            query: String::new(),
            filtered,
            selected: None,
            status: Status::Ready,
        }
    }

    /// Dispatch a command to its handler
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::AddClipboard => self.add_clipboard(),
            Command::CopySelected => self.copy_selected(),
            Command::DeleteSelected => self.delete_selected(),
            Command::ClearAll => self.clear_all(),
            Command::Search(query) => self.search_changed(query),
            Command::SelectUp => self.select_up(),
            Command::SelectDown => self.select_down(),
        }
    }

    fn add_clipboard(&mut self) {
        let text = match self.clipboard.get_text() {
            Ok(text) => text,
            Err(e) => {
                crate::log!("Clipboard read failed: {}", e);
                self.status = Status::NoClipboardText;
                return;
            }
        };

        if !self.history.add_or_promote(&text) {
            self.status = Status::ClipboardEmpty;
            return;
        }

        self.recompute_filter();
        self.status = Status::Added;
    }

    fn copy_selected(&mut self) {
        let Some(text) = self.selected_entry().map(str::to_string) else {
            self.status = Status::NoSelection;
            return;
        };

        if let Err(e) = self.clipboard.set_text(&text) {
            crate::log!("Clipboard write failed: {}", e);
            self.status = Status::CopyFailed(e.to_string());
            return;
        }

        self.history.promote(&text);
        self.recompute_filter();
        self.status = Status::Copied;
    }

    fn delete_selected(&mut self) {
        let Some(text) = self.selected_entry().map(str::to_string) else {
            self.status = Status::NoSelectionToDelete;
            return;
        };

        self.history.remove(&text);
        self.selected = None;
        self.recompute_filter();
        self.status = Status::Deleted;
    }

    fn clear_all(&mut self) {
        self.history.clear();
        self.selected = None;
        self.recompute_filter();
        self.status = Status::Cleared;
    }

    fn search_changed(&mut self, query: String) {
        self.query = query;
        self.recompute_filter();
    }

    fn select_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    fn select_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.filtered.len() - 1),
            None => 0,
        });
    }

    /// Rebuild the filtered view. The selection follows the previously
    /// selected entry's content when it is still visible; otherwise it
    /// is cleared.
    fn recompute_filter(&mut self) {
        let keep = self.selected_entry().map(str::to_string);
        self.filtered = filter::recompute(self.history.entries(), &self.query);
        self.selected = keep.and_then(|text| {
            self.filtered
                .iter()
                .position(|&i| self.history.entries()[i] == text)
        });
    }

    /// Latest status message
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Current search text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Entries of the filtered view, in display order
    pub fn filtered_entries(&self) -> impl Iterator<Item = &str> {
        self.filtered
            .iter()
            .map(|&i| self.history.entries()[i].as_str())
    }

    /// Number of entries in the filtered view
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Position of the selection within the filtered view
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Content of the selected entry
    pub fn selected_entry(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.filtered.get(i))
            .map(|&i| self.history.entries()[i].as_str())
    }

    /// The underlying history
    pub fn history(&self) -> &History {
        &self.history
    }
}
