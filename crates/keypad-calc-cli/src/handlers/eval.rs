//! Eval command handler

use std::io::Write;

use keypad_calc::driver::CalculatorDriver;
use keypad_calc::engine::{CalculatorEngine, CLEAR, EQUALS};
use tracing::info;

use super::styled_display;
use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Types an expression on a fresh engine and presses `=`
#[must_use]
pub fn evaluate_expression(config: &CliConfig, expression: &str) -> CalculatorEngine {
    let mut engine = CalculatorEngine::with_config(config.engine);
    engine.press(CLEAR);
    engine.enter_keys(expression);
    engine.press(EQUALS);
    engine
}

/// Execute the eval command
pub fn execute_eval<W: Write>(out: &mut W, config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let engine = evaluate_expression(config, &args.expression);
    info!(expression = %args.expression, display = engine.display_text(), "evaluated");
    writeln!(out, "{}", styled_display(engine.display_text()))?;

    if args.strict && engine.has_error() {
        return Err(CliError::evaluation(&args.expression));
    }
    Ok(())
}
