//! MaskEngine - raw text, cursor and the three-phase edit cycle.
//!
//! The host reports each text replacement as three notifications, in masked
//! coordinates:
//!
//! 1. [`MaskEngine::before_text_changed`] with the range about to be removed
//! 2. [`MaskEngine::on_text_changed`] with the host's new text and the range
//!    that was inserted
//! 3. [`MaskEngine::after_text_changed`], which writes the re-rendered masked
//!    text and the new cursor back to the host
//!
//! The raw text is the only state that survives a cycle; the masked text is
//! always rendered from it.

use std::ops::Range;

use super::buffer::RawBuffer;
use super::compiled::{CompiledMask, DEFAULT_PLACEHOLDER};
use super::host::{MaskedEdit, TextChange, TextHost};
use super::phase::EditPhase;
use super::render::render;

/// Masked input state: compiled mask, raw text, cursor and edit phase.
#[derive(Debug, Clone)]
pub struct MaskEngine {
    mask: CompiledMask,
    raw: RawBuffer,
    /// Pending cursor, applied to the host at the end of each cycle
    cursor: usize,
    phase: EditPhase,
    /// Set when the current edit starts outside the mask
    ignore: bool,
}

impl MaskEngine {
    pub fn new(pattern: &str, placeholder: char) -> Self {
        Self::from_compiled(CompiledMask::compile(pattern, placeholder))
    }

    /// Create an engine using `#` as the placeholder
    pub fn with_default_placeholder(pattern: &str) -> Self {
        Self::new(pattern, DEFAULT_PLACEHOLDER)
    }

    pub fn from_compiled(mask: CompiledMask) -> Self {
        let raw = RawBuffer::new(mask.slot_count());
        let cursor = mask.next_valid_position(0);
        Self {
            mask,
            raw,
            cursor,
            phase: EditPhase::Idle,
            ignore: false,
        }
    }

    pub fn compiled(&self) -> &CompiledMask {
        &self.mask
    }

    /// The masked display text
    pub fn masked_text(&self) -> String {
        render(&self.raw, &self.mask)
    }

    /// The characters the user entered, without literals
    pub fn raw_text(&self) -> String {
        self.raw.as_string()
    }

    pub fn raw(&self) -> &RawBuffer {
        &self.raw
    }

    /// Cursor position in masked coordinates
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// Check if every slot is filled
    pub fn is_complete(&self) -> bool {
        self.raw.is_full()
    }

    /// Replace the raw text programmatically. Literals are stripped, overflow
    /// is dropped, and the cursor moves to the first empty slot.
    pub fn set_raw_text(&mut self, text: &str) {
        self.raw.set_content(&self.mask.strip_literals(text));
        self.cursor = self.mask.fill_end_position(self.raw.len());
    }

    /// Empty the raw text and put the cursor on the first slot
    pub fn clear(&mut self) {
        self.raw.clear();
        self.cursor = self.mask.next_valid_position(0);
    }
}

// =============================================================================
// Edit cycle
// =============================================================================

impl MaskEngine {
    /// First phase: `count` characters at masked position `start` are about
    /// to be removed. Returns false if the notification was out of order.
    pub fn before_text_changed(&mut self, start: usize, count: usize) -> bool {
        if !self.phase.accepts(EditPhase::Before) {
            tracing::trace!(phase = ?self.phase, start, count, "skipping before_text_changed");
            return false;
        }
        self.phase = EditPhase::Before;

        if start >= self.mask.len() {
            tracing::debug!(start, len = self.mask.len(), "edit starts outside the mask");
            self.ignore = true;
        } else if let Some(range) = self.calculate_range(start, start.saturating_add(count)) {
            let removed = self.raw.remove(range.clone());
            tracing::trace!(?range, %removed, "removed raw text");
        }

        if count > 0 {
            let start = isize::try_from(start).unwrap_or(isize::MAX);
            self.cursor = self.mask.previous_valid_position(start);
        }
        true
    }

    /// Second phase: `count` characters were inserted at masked position
    /// `start` of `text`, the host's full text after the change.
    pub fn on_text_changed(&mut self, text: &str, start: usize, count: usize) -> bool {
        if !self.phase.accepts(EditPhase::OnChanged) {
            tracing::trace!(phase = ?self.phase, start, count, "skipping on_text_changed");
            return false;
        }
        self.phase = EditPhase::OnChanged;

        if self.ignore || count == 0 {
            return true;
        }

        let insert_at = self
            .mask
            .raw_index(self.mask.next_valid_position(start))
            .unwrap_or(self.raw.len());
        let added: String = text.chars().skip(start).take(count).collect();
        let cleaned = self.mask.strip_literals(&added);

        let inserted = self.raw.insert(insert_at, &cleaned);
        let wanted = cleaned.chars().count();
        if inserted < wanted {
            tracing::debug!(
                dropped = wanted - inserted,
                capacity = self.raw.capacity(),
                "raw text full, dropping extra input"
            );
        }

        self.cursor = self.mask.next_valid_position(start.saturating_add(count));
        true
    }

    /// Third phase: render the masked text, hand it and the cursor to the
    /// host, and reset for the next cycle.
    pub fn after_text_changed<H: TextHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if !self.phase.accepts(EditPhase::After) {
            tracing::trace!(phase = ?self.phase, "skipping after_text_changed");
            return false;
        }
        self.phase = EditPhase::After;

        let text = self.masked_text();
        host.set_text(&text);
        host.set_cursor(self.cursor);

        self.phase = EditPhase::Idle;
        self.ignore = false;
        true
    }

    /// Run a full cycle for a single replacement against the current masked
    /// text, returning what the host should display.
    pub fn apply(&mut self, change: &TextChange) -> MaskedEdit {
        let mut edit = MaskedEdit {
            text: self.masked_text(),
            cursor: self.cursor,
        };
        let text = change.apply_to(&edit.text);

        self.before_text_changed(change.start, change.removed);
        self.on_text_changed(&text, change.start, change.inserted_len());
        self.after_text_changed(&mut edit);
        edit
    }

    /// Translate the masked interval `start..end` into the raw range it
    /// deletes.
    ///
    /// Deleting only literals removes the raw character in the slot before
    /// them, so backspacing over a separator behaves like backspacing over
    /// the digit before it.
    fn calculate_range(&self, start: usize, end: usize) -> Option<Range<usize>> {
        let mut range: Option<Range<usize>> = None;
        for position in start..end.min(self.mask.len()) {
            if let Some(raw) = self.mask.raw_index(position) {
                range = Some(match range {
                    Some(range) => range.start..raw + 1,
                    None => raw..raw + 1,
                });
            }
        }

        if end >= self.mask.len() {
            if let Some(range) = range.as_mut() {
                range.end = self.raw.len();
            }
        }

        if range.is_none() && start < end {
            let previous = self.mask.previous_valid_position(start as isize - 1);
            if previous < start {
                if let Some(raw) = self.mask.raw_index(previous) {
                    tracing::trace!(start, end, previous, "widening literal deletion");
                    range = Some(raw..raw + 1);
                }
            }
        }

        let len = self.raw.len();
        range
            .map(|range| range.start.min(len)..range.end.min(len))
            .filter(|range| !range.is_empty())
    }
}
