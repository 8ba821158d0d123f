//! maskedit - input masks for formatted text fields
//!
//! This crate provides a bidirectional mask engine that keeps the characters
//! a user typed separate from the formatted text shown to them, plus the
//! configuration and tracing used by the `maskedit` binary.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod mask;
pub mod tracing;

// Re-export commonly used types
pub use config::MaskConfig;
pub use mask::{CompiledMask, MaskEngine, MaskPreset, MaskedField, TextChange};
