//! maskedit - format text through an input mask from the command line

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use maskedit::cli::{CliArgs, RunConfig, RunMode};
use maskedit::config::MaskConfig;
use maskedit::mask::{MaskedField, TextChange};

fn main() -> Result<()> {
    maskedit::tracing::init();

    let args = CliArgs::parse();
    let mut config = MaskConfig::load();
    let run = args
        .into_config(&config)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::debug!(pattern = %run.pattern, placeholder = %run.placeholder, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &run.mode {
        RunMode::Format(inputs) if inputs.is_empty() => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                writeln!(out, "{}", format_input(&run, &line))?;
            }
        }
        RunMode::Format(inputs) => {
            for input in inputs {
                writeln!(out, "{}", format_input(&run, input))?;
            }
        }
        RunMode::Replay(path) => replay(&run, path, &mut out)?,
        RunMode::SaveMask { name, pattern } => {
            config
                .save_mask(name, pattern)
                .map_err(|e| anyhow::anyhow!("{}", e))?;
            writeln!(out, "Saved mask {}: {}", name, pattern)?;
        }
    }

    Ok(())
}

/// Paste `input` into an empty field and return what it shows
fn format_input(run: &RunConfig, input: &str) -> String {
    let mut field = MaskedField::new(&run.pattern, run.placeholder);
    field.paste(input);
    if run.print_raw {
        field.raw_text()
    } else {
        field.text().to_string()
    }
}

/// Apply each JSON-encoded edit in `path` to one field, printing the field
/// after every edit
fn replay(run: &RunConfig, path: &Path, out: &mut impl Write) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;

    let mut field = MaskedField::new(&run.pattern, run.placeholder);
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let change: TextChange = serde_json::from_str(line)
            .with_context(|| format!("Invalid edit event on line {}", number + 1))?;
        field.apply(&change);

        let shown = if run.print_raw {
            field.raw_text()
        } else {
            field.text().to_string()
        };
        writeln!(out, "{}\t{}", shown, field.cursor())?;
    }
    Ok(())
}
