//! Press command handler

use std::io::Write;

use keypad_calc::driver::{split_keys, CalculatorDriver, RecordingDriver};
use keypad_calc::engine::CalculatorEngine;
use tracing::info;

use super::styled_display;
use crate::commands::PressArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Splits every argument into single-character keypad tokens
#[must_use]
pub fn collect_tokens(keys: &[String]) -> Vec<&str> {
    keys.iter().flat_map(|arg| split_keys(arg)).collect()
}

/// Execute the press command
pub fn execute_press<W: Write>(out: &mut W, config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let tokens = collect_tokens(&args.keys);
    if tokens.is_empty() {
        return Err(CliError::invalid_argument("no keys to press"));
    }

    let mut driver = RecordingDriver::with_engine(CalculatorEngine::with_config(config.engine));
    for token in &tokens {
        driver.press(token);
    }
    info!(presses = tokens.len(), display = %driver.display(), "keys pressed");

    let transcript = driver.into_transcript();
    if args.json {
        writeln!(out, "{}", transcript.to_json()?)?;
    } else if args.trace {
        for line in transcript.lines() {
            writeln!(out, "{line}")?;
        }
    } else {
        writeln!(out, "{}", styled_display(&transcript.display))?;
    }
    Ok(())
}
