//! Keypad command handler

use std::io::Write;

use keypad_calc::engine::IDLE_DISPLAY;
use keypad_calc::keypad::Keypad;

use crate::error::CliResult;

/// Execute the keypad command: print the idle keypad
pub fn execute_keypad<W: Write>(out: &mut W) -> CliResult<()> {
    for line in Keypad::new().render(IDLE_DISPLAY) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
