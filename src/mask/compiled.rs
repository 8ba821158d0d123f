//! Compiled mask tables.
//!
//! A mask pattern is scanned once into two lookup tables: one from masked
//! positions to raw slots and one from raw slots back to masked positions.
//! Everything else in the engine is expressed in terms of these tables.

/// Default placeholder character marking a user-fillable slot.
pub const DEFAULT_PLACEHOLDER: char = '#';

/// Character shown in a slot that has no raw character yet.
pub const BLANK: char = ' ';

/// Immutable position tables derived from a mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMask {
    /// The mask pattern, one entry per masked position
    pattern: Vec<char>,
    /// Character designating a slot in `pattern`
    placeholder: char,
    /// Raw index for each masked position (None for literals)
    masked_to_raw: Vec<Option<usize>>,
    /// Masked position for each raw slot, in order
    raw_to_masked: Vec<usize>,
    /// Distinct literal characters, in order of first appearance
    literal_chars: Vec<char>,
}

impl CompiledMask {
    /// Compile a mask pattern. Any pattern is accepted, including one without
    /// placeholders, in which case the raw text is always empty.
    pub fn compile(pattern: &str, placeholder: char) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut masked_to_raw = Vec::with_capacity(pattern.len());
        let mut raw_to_masked = Vec::new();
        let mut literal_chars: Vec<char> = Vec::new();

        for (i, &ch) in pattern.iter().enumerate() {
            if ch == placeholder {
                masked_to_raw.push(Some(raw_to_masked.len()));
                raw_to_masked.push(i);
            } else {
                if !literal_chars.contains(&ch) {
                    literal_chars.push(ch);
                }
                masked_to_raw.push(None);
            }
        }

        Self {
            pattern,
            placeholder,
            masked_to_raw,
            raw_to_masked,
            literal_chars,
        }
    }

    /// The mask pattern as a String
    pub fn pattern(&self) -> String {
        self.pattern.iter().collect()
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Length of the masked text in characters
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Number of slots, which is also the maximum raw text length
    pub fn slot_count(&self) -> usize {
        self.raw_to_masked.len()
    }

    pub fn masked_to_raw(&self) -> &[Option<usize>] {
        &self.masked_to_raw
    }

    pub fn raw_to_masked(&self) -> &[usize] {
        &self.raw_to_masked
    }

    pub fn literal_chars(&self) -> &[char] {
        &self.literal_chars
    }

    /// Check if a character appears as a literal in the mask
    pub fn is_literal_char(&self, ch: char) -> bool {
        self.literal_chars.contains(&ch)
    }

    /// Pattern character at a masked position
    pub fn pattern_char(&self, position: usize) -> Option<char> {
        self.pattern.get(position).copied()
    }

    /// Remove every mask literal from `text`, so pasted input that already
    /// carries the mask's separators does not duplicate them.
    pub fn strip_literals(&self, text: &str) -> String {
        text.chars().filter(|c| !self.is_literal_char(*c)).collect()
    }
}
