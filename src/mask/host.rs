//! Types exchanged with the host text widget.

use serde::{Deserialize, Serialize};

/// The display side of a masked input: whatever widget shows the masked text
/// and the cursor.
///
/// Writes made through this trait are the engine's own output. A host must
/// not report them back to the engine as user edits.
pub trait TextHost {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str);

    /// Move the cursor to a masked position
    fn set_cursor(&mut self, position: usize);
}

/// A single replacement reported by the host, in masked coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChange {
    /// Masked position where the change starts
    pub start: usize,
    /// Number of characters removed at `start`
    #[serde(default)]
    pub removed: usize,
    /// Text inserted at `start`
    #[serde(default)]
    pub inserted: String,
}

impl TextChange {
    pub fn insert(start: usize, text: &str) -> Self {
        Self {
            start,
            removed: 0,
            inserted: text.to_string(),
        }
    }

    pub fn delete(start: usize, removed: usize) -> Self {
        Self {
            start,
            removed,
            inserted: String::new(),
        }
    }

    pub fn replace(start: usize, removed: usize, text: &str) -> Self {
        Self {
            start,
            removed,
            inserted: text.to_string(),
        }
    }

    /// Number of inserted characters
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }

    /// The host text after applying this change to `before`
    pub fn apply_to(&self, before: &str) -> String {
        let chars: Vec<char> = before.chars().collect();
        let start = self.start.min(chars.len());
        let end = self.start.saturating_add(self.removed).min(chars.len());

        let mut after: String = chars[..start].iter().collect();
        after.push_str(&self.inserted);
        after.extend(&chars[end..]);
        after
    }
}

/// Result of one completed edit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedEdit {
    /// Masked text to display
    pub text: String,
    /// Cursor position in masked coordinates
    pub cursor: usize,
}

impl TextHost for MaskedEdit {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position;
    }
}
