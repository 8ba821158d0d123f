//! MaskedField - a minimal text host driving a [`MaskEngine`].
//!
//! Plays the part of a text widget: it owns the displayed text and cursor,
//! turns key-level operations into before/on/after notifications in masked
//! coordinates, and applies what the engine writes back.

use std::ops::Range;

use tracing::debug;

use crate::tracing::EditSnapshot;

use super::engine::MaskEngine;
use super::host::{TextChange, TextHost};
use super::preset::MaskPreset;

/// Text and cursor as shown by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Display {
    text: String,
    cursor: usize,
}

impl TextHost for Display {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor = position;
    }
}

/// A masked single-line input.
#[derive(Debug, Clone)]
pub struct MaskedField {
    engine: MaskEngine,
    display: Display,
}

impl MaskedField {
    pub fn new(pattern: &str, placeholder: char) -> Self {
        Self::from_engine(MaskEngine::new(pattern, placeholder))
    }

    pub fn from_preset(preset: MaskPreset) -> Self {
        Self::from_engine(preset.engine())
    }

    pub fn from_engine(engine: MaskEngine) -> Self {
        let display = Display {
            text: engine.masked_text(),
            cursor: engine.cursor(),
        };
        Self { engine, display }
    }

    pub fn engine(&self) -> &MaskEngine {
        &self.engine
    }

    /// Displayed (masked) text
    pub fn text(&self) -> &str {
        &self.display.text
    }

    pub fn raw_text(&self) -> String {
        self.engine.raw_text()
    }

    pub fn cursor(&self) -> usize {
        self.display.cursor
    }

    fn len_chars(&self) -> usize {
        self.display.text.chars().count()
    }

    /// Place the cursor, as a mouse click would
    pub fn set_cursor(&mut self, position: usize) {
        self.display.cursor = position.min(self.len_chars());
    }

    /// Replace the characters in `range` with `text`, reporting the change to
    /// the engine the way a text widget would.
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let change = TextChange::replace(start, end - start, text);

        let before = EditSnapshot::from_engine(&self.engine);

        self.engine.before_text_changed(change.start, change.removed);
        self.display.text = change.apply_to(&self.display.text);
        self.engine
            .on_text_changed(&self.display.text, change.start, change.inserted_len());
        self.engine.after_text_changed(&mut self.display);

        let after = EditSnapshot::from_engine(&self.engine);
        if let Some(diff) = before.diff(&after) {
            debug!(target: "mask", %diff, "field changed");
        }
    }

    /// Apply a change reported in masked coordinates
    pub fn apply(&mut self, change: &TextChange) {
        self.replace(
            change.start..change.start.saturating_add(change.removed),
            &change.inserted,
        );
    }

    /// Type a character at the cursor
    pub fn type_char(&mut self, ch: char) {
        let cursor = self.cursor();
        self.replace(cursor..cursor, ch.encode_utf8(&mut [0; 4]));
    }

    /// Insert text at the cursor
    pub fn paste(&mut self, text: &str) {
        let cursor = self.cursor();
        self.replace(cursor..cursor, text);
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        let cursor = self.cursor();
        if cursor > 0 {
            self.replace(cursor - 1..cursor, "");
        }
    }

    /// Delete the character after the cursor
    pub fn delete_forward(&mut self) {
        let cursor = self.cursor();
        if cursor < self.len_chars() {
            self.replace(cursor..cursor + 1, "");
        }
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.engine.clear();
        self.display.text = self.engine.masked_text();
        self.display.cursor = self.engine.cursor();
    }
}
