//! Bounded calculation history, most recent first.

use std::collections::VecDeque;

/// A most-recent-first log of formatted calculations.
///
/// Holds at most [`History::CAPACITY`] lines; recording past the bound
/// evicts the oldest line.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Lines, newest at the front.
    entries: VecDeque<String>,
}

impl History {
    /// Maximum number of retained lines.
    pub const CAPACITY: usize = 10;

    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(Self::CAPACITY + 1),
        }
    }

    /// Records a line at the front, evicting the oldest if full.
    pub fn record(&mut self, line: String) {
        self.entries.push_front(line);
        self.entries.truncate(Self::CAPACITY);
    }

    /// Returns the newest line.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Iterates from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the number of retained lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every line.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
