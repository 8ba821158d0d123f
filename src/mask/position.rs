//! Navigation between masked and raw coordinates.

use super::compiled::CompiledMask;

impl CompiledMask {
    /// Check if a masked position holds a slot (not a literal)
    pub fn is_valid_position(&self, position: usize) -> bool {
        matches!(self.masked_to_raw().get(position), Some(Some(_)))
    }

    /// Raw index of the slot at a masked position, None for literals and
    /// positions past the end
    pub fn raw_index(&self, position: usize) -> Option<usize> {
        self.masked_to_raw().get(position).copied().flatten()
    }

    /// Masked position of a raw slot
    pub fn masked_index(&self, raw: usize) -> Option<usize> {
        self.raw_to_masked().get(raw).copied()
    }

    /// First slot at or after `position`, or the mask length when there is
    /// none (the "after last slot" position).
    pub fn next_valid_position(&self, position: usize) -> usize {
        let mut position = position;
        while position < self.len() && !self.is_valid_position(position) {
            position += 1;
        }
        position.min(self.len())
    }

    /// Last slot at or before `position`.
    ///
    /// Running below zero falls back to `next_valid_position(0)`, so the
    /// result is never negative. A start past the end of the mask scans from
    /// the last masked position.
    pub fn previous_valid_position(&self, position: isize) -> usize {
        if position < 0 || self.is_empty() {
            return self.next_valid_position(0);
        }

        let mut position = (position as usize).min(self.len() - 1);
        loop {
            if self.is_valid_position(position) {
                return position;
            }
            if position == 0 {
                return self.next_valid_position(0);
            }
            position -= 1;
        }
    }

    /// Masked position right after the last filled slot for a raw text of
    /// `raw_len` characters.
    pub fn fill_end_position(&self, raw_len: usize) -> usize {
        self.masked_index(raw_len).unwrap_or(self.len())
    }
}
