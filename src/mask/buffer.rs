//! Bounded raw-text buffer.
//!
//! Holds only the characters the user entered, never more than there are
//! slots in the mask. Offsets are character indices.

use std::ops::Range;

/// Raw text backed by a `Vec<char>` with a fixed capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBuffer {
    chars: Vec<char>,
    capacity: usize,
}

impl RawBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            chars: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Create a buffer from text, dropping whatever does not fit
    pub fn from_text(text: &str, capacity: usize) -> Self {
        let mut buffer = Self::new(capacity);
        buffer.insert(0, text);
        buffer
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Maximum number of characters (slot count of the mask)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of characters that can still be inserted
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.chars.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Get character at offset, None if out of bounds
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Get full content as String
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// Insert text at character offset.
    ///
    /// The offset is clamped to the current length, and only as many
    /// characters as fit in the remaining capacity are taken from `text`.
    /// Returns the number of characters inserted.
    pub fn insert(&mut self, offset: usize, text: &str) -> usize {
        let offset = offset.min(self.chars.len());
        let fitting: Vec<char> = text.chars().take(self.remaining()).collect();
        let inserted = fitting.len();
        self.chars.splice(offset..offset, fitting);
        inserted
    }

    /// Remove the characters in `range`, clamped to the current length.
    /// Returns the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let end = range.end.min(self.chars.len());
        let start = range.start.min(end);
        self.chars.drain(start..end).collect()
    }

    /// Clear all content
    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Set content, replacing everything (truncated to capacity)
    pub fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}
