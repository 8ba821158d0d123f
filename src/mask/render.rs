//! Masked text rendering.

use super::buffer::RawBuffer;
use super::compiled::{CompiledMask, BLANK};

/// Render the masked display text for `raw`.
///
/// Every placeholder becomes a blank, then each raw character is placed in
/// its slot. Slots past the end of the raw text stay blank.
pub fn render(raw: &RawBuffer, mask: &CompiledMask) -> String {
    let mut masked: Vec<char> = (0..mask.len())
        .map(|i| match mask.pattern_char(i) {
            Some(ch) if ch != mask.placeholder() => ch,
            _ => BLANK,
        })
        .collect();

    for (i, &position) in mask.raw_to_masked().iter().enumerate() {
        masked[position] = raw.char_at(i).unwrap_or(BLANK);
    }

    masked.into_iter().collect()
}

/// Read the raw text back out of a masked string.
///
/// Takes the characters at slot positions, stopping at the first position
/// the masked string does not reach, and trims trailing blanks.
pub fn extract_raw(masked: &str, mask: &CompiledMask) -> String {
    let chars: Vec<char> = masked.chars().collect();
    let raw: String = mask
        .raw_to_masked()
        .iter()
        .map_while(|&position| chars.get(position).copied())
        .collect();
    raw.trim_end_matches(BLANK).to_string()
}
