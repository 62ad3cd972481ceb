//! System clipboard boundary
//!
//! Text reads and writes go through arboard with a fresh handle per
//! operation. Failures surface as errors for the controller to turn
//! into status messages; nothing here panics.

use crate::error::ClipboardError;

/// Text clipboard access
pub trait Clipboard {
    /// Read the current clipboard text
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the operating system
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Create a system clipboard handle factory
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard.get_text().map_err(|_| ClipboardError::NoText)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
