//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use maskedit::mask::{MaskEngine, MaskedField};

pub const PHONE: &str = "(###) ###-####";

/// Engine for `pattern` with `raw` already entered
pub fn engine_with_raw(pattern: &str, raw: &str) -> MaskEngine {
    let mut engine = MaskEngine::with_default_placeholder(pattern);
    engine.set_raw_text(raw);
    engine
}

/// Field for `pattern` with `input` pasted and the cursor at `cursor`
pub fn field_with(pattern: &str, input: &str, cursor: usize) -> MaskedField {
    let mut field = MaskedField::new(pattern, '#');
    field.paste(input);
    field.set_cursor(cursor);
    field
}

/// Type every character of `text` at the cursor
pub fn type_text(field: &mut MaskedField, text: &str) {
    for ch in text.chars() {
        field.type_char(ch);
    }
}
