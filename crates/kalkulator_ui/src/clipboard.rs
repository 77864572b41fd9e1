//! Clipboard sink for "Copy Result".

use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for copied text.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents.
    fn set_text(&self, text: &str);
}

/// In-process clipboard shared between the widget and its host.
///
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    /// Creates an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) {
        *self.contents.lock() = Some(text.to_owned());
    }
}
