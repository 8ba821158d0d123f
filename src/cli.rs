//! Command-line argument parsing
//!
//! Supports:
//! - Choosing a mask by pattern, preset name or config default
//! - Formatting inputs as if pasted into an empty field
//! - Replaying a recorded list of edit events
//! - Saving a named mask to the config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::MaskConfig;

/// Format text through an input mask
#[derive(Parser, Debug)]
#[command(name = "maskedit", version, about = "Format text through an input mask")]
pub struct CliArgs {
    /// Inputs to format, each pasted into an empty field
    #[arg(value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Mask pattern, e.g. "(###) ###-####"
    #[arg(short, long, value_name = "PATTERN", conflicts_with = "preset")]
    pub mask: Option<String>,

    /// Named mask (from config, or built-in: phone, date, cpf, ...)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Placeholder character in the mask pattern
    #[arg(long, value_name = "CHAR")]
    pub placeholder: Option<char>,

    /// Replay edit events from a JSON lines file
    #[arg(short, long, value_name = "FILE")]
    pub events: Option<PathBuf>,

    /// Print raw text instead of masked text
    #[arg(short, long)]
    pub raw: bool,

    /// Save a named mask to the config file and exit
    #[arg(
        long,
        num_args = 2,
        value_names = ["NAME", "PATTERN"],
        conflicts_with_all = ["mask", "preset", "events"]
    )]
    pub save_mask: Option<Vec<String>>,
}

/// What to do with the mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Format each input
    Format(Vec<String>),
    /// Replay edit events from a file
    Replay(PathBuf),
    /// Store `pattern` under `name` in the config file
    SaveMask { name: String, pattern: String },
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub pattern: String,
    pub placeholder: char,
    pub mode: RunMode,
    pub print_raw: bool,
}

impl CliArgs {
    /// Resolve the mask and mode against the loaded configuration
    pub fn into_config(self, config: &MaskConfig) -> Result<RunConfig, String> {
        if let Some(values) = self.save_mask {
            let [name, pattern]: [String; 2] = values
                .try_into()
                .map_err(|_| "--save-mask takes a name and a pattern".to_string())?;
            if name.trim().is_empty() {
                return Err("Mask name must not be empty".to_string());
            }
            return Ok(RunConfig {
                pattern: pattern.clone(),
                placeholder: self.placeholder.unwrap_or(config.placeholder),
                mode: RunMode::SaveMask { name, pattern },
                print_raw: self.raw,
            });
        }

        let pattern = if let Some(mask) = self.mask {
            mask
        } else if let Some(name) = self.preset.as_deref() {
            config
                .resolve_mask(name)
                .ok_or_else(|| format!("Unknown mask preset: {}", name))?
        } else {
            config
                .default_pattern()
                .ok_or_else(|| "No mask given (use --mask or --preset)".to_string())?
        };

        let mode = match self.events {
            Some(path) => RunMode::Replay(path),
            None => RunMode::Format(self.inputs),
        };

        Ok(RunConfig {
            pattern,
            placeholder: self.placeholder.unwrap_or(config.placeholder),
            mode,
            print_raw: self.raw,
        })
    }
}
