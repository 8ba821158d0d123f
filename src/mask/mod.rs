//! Input masks for formatted text fields.
//!
//! A mask such as `(###) ###-####` mixes placeholder characters (slots the
//! user fills) with literal separators. The engine keeps only the characters
//! the user entered (the raw text) and renders the masked text from them,
//! translating every edit the host reports from masked coordinates into raw
//! coordinates.
//!
//! # Architecture
//!
//! - [`CompiledMask`]: position tables built once from the pattern, plus the
//!   navigation helpers (`next_valid_position`, `previous_valid_position`)
//! - [`RawBuffer`]: the bounded raw text
//! - [`MaskEngine`]: raw text, cursor and the three-phase edit cycle
//! - [`EditPhase`]: where the engine is within a cycle
//! - [`render`] / [`extract_raw`]: raw text to masked text and back
//! - [`TextHost`]: the widget side receiving the masked text and cursor
//! - [`MaskedField`]: a host that turns key-level operations into edits
//! - [`MaskPreset`]: built-in patterns
//!
//! # Example
//!
//! ```
//! use maskedit::mask::{MaskEngine, TextChange};
//!
//! let mut engine = MaskEngine::with_default_placeholder("(###) ###-####");
//! let edit = engine.apply(&TextChange::insert(1, "1"));
//!
//! assert_eq!(edit.text, "(1  )    -    ");
//! assert_eq!(edit.cursor, 2);
//! assert_eq!(engine.raw_text(), "1");
//! ```

mod buffer;
mod compiled;
mod engine;
mod field;
mod host;
mod phase;
mod position;
mod preset;
mod render;

// Re-export main types
pub use buffer::RawBuffer;
pub use compiled::{CompiledMask, BLANK, DEFAULT_PLACEHOLDER};
pub use engine::MaskEngine;
pub use field::MaskedField;
pub use host::{MaskedEdit, TextChange, TextHost};
pub use phase::EditPhase;
pub use preset::MaskPreset;
pub use render::{extract_raw, render};
